use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

/**
 * Merkle primitives shared by the off-chain tree builder and the on-chain verifier
 *
 * Tree Structure:
 * - Each leaf: hash(claimant_pubkey (32 bytes) + amount (8 bytes, big-endian))
 * - Intermediate nodes: hash(min(a, b) + max(a, b)), i.e. siblings sorted bytewise
 * - A level with an odd number of nodes carries its last node up unchanged
 *
 * Both sides must call these functions rather than re-deriving the encoding,
 * otherwise roots will silently diverge.
 */

/// Which side of the sorted pair the sibling digest occupies
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
}

/// One step of a merkle proof, from the leaf towards the root
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofStep {
    /// Digest of the sibling node at this level
    pub sibling: [u8; 32],
    /// Side of the sorted pair the sibling occupies
    /// - Informational only, `verify` re-sorts every pair
    pub position: Position,
}

impl ProofStep {
    /// Build a step for `sibling` relative to the node currently being folded
    pub fn new(sibling: [u8; 32], node: &[u8; 32]) -> Self {
        let position = if sibling <= *node {
            Position::Left
        } else {
            Position::Right
        };
        Self { sibling, position }
    }
}

/// Hash a (claimant, amount) pair into a leaf digest
pub fn hash_leaf(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    hashv(&[claimant.as_ref(), &amount.to_be_bytes()]).to_bytes()
}

/// Hash two sibling digests in canonical (sorted) order
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Fold `proof` over `leaf` and compare the result with `root`
pub fn verify(proof: &[ProofStep], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, step| hash_pair(&node, &step.sibling));
    computed == root
}

/// Verify that (claimant, amount) is committed under `root`
pub fn verify_claim(root: &[u8; 32], claimant: &Pubkey, amount: u64, proof: &[ProofStep]) -> bool {
    verify(proof, *root, hash_leaf(claimant, amount))
}
