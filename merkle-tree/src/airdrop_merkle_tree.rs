use anchor_lang::prelude::Pubkey;
use merkle_airdrop::merkle::ProofStep;
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use tracing::{debug, info, warn};

use crate::{
    csv_entry::CsvEntry,
    error::{MerkleTreeError, Result},
    merkle_tree::MerkleTree,
    tree_node::TreeNode,
};

/// Merkle tree which will be used to distribute tokens to recipients.
///
/// Recipients are sorted by pubkey bytes before the tree is built, so the same
/// recipient set always commits to the same root regardless of input order.
#[derive(Debug, Clone)]
pub struct AirdropMerkleTree {
    /// The merkle root, which is uploaded on-chain
    merkle_root: [u8; 32],
    total_amount: u64,
    /// Leaves in commitment order
    tree_nodes: Vec<TreeNode>,
    tree: MerkleTree,
    index: HashMap<Pubkey, usize>,
}

/// Persisted form of a commitment: the root plus every leaf in commitment order
#[derive(Debug, Serialize, Deserialize)]
struct CommitmentArtifact {
    #[serde(with = "hex::serde")]
    merkle_root: [u8; 32],
    num_recipients: u64,
    total_amount: u64,
    leaves: Vec<TreeNode>,
}

impl AirdropMerkleTree {
    /// Canonicalize `tree_nodes` (sort by recipient) and build the tree
    pub fn new(mut tree_nodes: Vec<TreeNode>) -> Result<Self> {
        tree_nodes.sort_by_key(|node| node.recipient.to_bytes());
        let tree = Self::build(tree_nodes)?;

        info!(
            recipients = tree.num_recipients(),
            total_amount = tree.total_amount,
            root = %hex::encode(tree.merkle_root),
            "Built airdrop merkle tree"
        );
        Ok(tree)
    }

    /// Load a merkle tree from a csv path
    pub fn new_from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let csv_entries = CsvEntry::new_from_file(path)?;
        let tree_nodes: Vec<TreeNode> = csv_entries.into_iter().map(TreeNode::from).collect();
        Self::new(tree_nodes)
    }

    /// Build over `tree_nodes` exactly as given
    fn build(tree_nodes: Vec<TreeNode>) -> Result<Self> {
        if tree_nodes.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }

        let mut seen = HashSet::with_capacity(tree_nodes.len());
        for node in &tree_nodes {
            // The program can never authorize these
            if node.amount == 0 || node.recipient == Pubkey::default() {
                return Err(MerkleTreeError::InvalidLeaf {
                    recipient: node.recipient,
                    amount: node.amount,
                });
            }
            if !seen.insert(node.recipient) {
                return Err(MerkleTreeError::DuplicateRecipient(node.recipient));
            }
        }

        let total_amount = tree_nodes.iter().try_fold(0u64, |total, node| {
            total
                .checked_add(node.amount)
                .ok_or(MerkleTreeError::ArithmeticError)
        })?;

        let tree = MerkleTree::new(tree_nodes.iter().map(TreeNode::hash).collect())?;
        let index = tree_nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.recipient, i))
            .collect();

        Ok(Self {
            merkle_root: tree.root(),
            total_amount,
            tree_nodes,
            tree,
            index,
        })
    }

    /// Load a commitment artifact and rebuild its tree.
    ///
    /// Leaves are taken in the stored order; a root that does not match them is rejected.
    pub fn new_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let artifact: CommitmentArtifact = serde_json::from_reader(BufReader::new(file))?;

        let tree = Self::build(artifact.leaves)?;
        if tree.merkle_root != artifact.merkle_root
            || tree.num_recipients() != artifact.num_recipients
            || tree.total_amount != artifact.total_amount
        {
            warn!("Commitment artifact does not match its leaves");
            return Err(MerkleTreeError::RootMismatch {
                expected: hex::encode(artifact.merkle_root),
                computed: hex::encode(tree.merkle_root),
            });
        }

        debug!(recipients = tree.num_recipients(), "Loaded commitment artifact");
        Ok(tree)
    }

    /// Write the commitment artifact as JSON
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let artifact = CommitmentArtifact {
            merkle_root: self.merkle_root,
            num_recipients: self.num_recipients(),
            total_amount: self.total_amount,
            leaves: self.tree_nodes.clone(),
        };

        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &artifact)?;
        writer.flush()?;
        Ok(())
    }

    pub fn merkle_root(&self) -> [u8; 32] {
        self.merkle_root
    }

    pub fn num_recipients(&self) -> u64 {
        self.tree_nodes.len() as u64
    }

    pub fn total_amount(&self) -> u64 {
        self.total_amount
    }

    pub fn tree_nodes(&self) -> &[TreeNode] {
        &self.tree_nodes
    }

    pub fn get_node(&self, recipient: &Pubkey) -> Option<&TreeNode> {
        self.index.get(recipient).map(|&i| &self.tree_nodes[i])
    }

    /// Proof for the leaf at `index` in commitment order
    pub fn get_proof_by_index(&self, index: usize) -> Result<Vec<ProofStep>> {
        self.tree.get_proof(index)
    }

    pub fn get_proof(&self, recipient: &Pubkey) -> Result<Vec<ProofStep>> {
        let index = self
            .index
            .get(recipient)
            .ok_or(MerkleTreeError::RecipientNotFound(*recipient))?;
        self.tree.get_proof(*index)
    }

    /// Check that every leaf's proof folds back to the root
    pub fn verify_proof(&self) -> Result<()> {
        for (i, node) in self.tree_nodes.iter().enumerate() {
            let proof = self.tree.get_proof(i)?;
            if !merkle_airdrop::merkle::verify_claim(
                &self.merkle_root,
                &node.recipient,
                node.amount,
                &proof,
            ) {
                return Err(MerkleTreeError::InvalidProof {
                    recipient: node.recipient,
                });
            }
        }
        Ok(())
    }
}
