use merkle_airdrop::merkle::{hash_pair, verify, ProofStep};

use crate::error::{MerkleTreeError, Result};

/// Binary merkle tree with sorted sibling pairs.
///
/// Every level is retained, bottom (leaves, in the order given) to top (root),
/// so proofs are read out without rehashing. A level with an odd number of
/// nodes carries its last node up unchanged rather than pairing it with itself;
/// the on-chain verifier relies on exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<[u8; 32]>>,
    root: [u8; 32],
}

impl MerkleTree {
    /// Build the tree over `leaves`. The order of `leaves` is part of the commitment.
    pub fn new(leaves: Vec<[u8; 32]>) -> Result<Self> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }

        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let next = Self::next_level(&levels[levels.len() - 1]);
            levels.push(next);
        }
        let root = levels[levels.len() - 1][0];

        Ok(Self { levels, root })
    }

    fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
        level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_pair(left, right),
                // Odd node out, carried up as is
                _ => pair[0],
            })
            .collect()
    }

    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    pub fn leaves(&self) -> &[[u8; 32]] {
        &self.levels[0]
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Sibling path from the leaf at `index` to the root
    pub fn get_proof(&self, index: usize) -> Result<Vec<ProofStep>> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleTreeError::IndexOutOfRange { index, leaf_count });
        }

        let mut proof = Vec::with_capacity(self.depth());
        let mut position = index;
        for level in &self.levels[..self.depth()] {
            // A carried node has no sibling and contributes no step
            if let Some(sibling) = level.get(position ^ 1) {
                proof.push(ProofStep::new(*sibling, &level[position]));
            }
            position /= 2;
        }

        Ok(proof)
    }

    /// Check the proof for `index` against this tree's own root
    pub fn verify_proof(&self, index: usize) -> Result<bool> {
        let proof = self.get_proof(index)?;
        Ok(verify(&proof, self.root, self.levels[0][index]))
    }
}
