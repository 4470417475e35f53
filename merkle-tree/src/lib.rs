//! Off-chain side of the merkle airdrop: reads the holder list, commits it to a
//! root, persists the commitment and answers proof requests.
//!
//! Leaf encoding, pair hashing and verification are imported from the program
//! crate so the two sides cannot diverge.

pub mod airdrop_merkle_tree;
mod csv_entry;
mod error;
pub mod ledger;
pub mod merkle_tree;
mod tree_node;

pub use airdrop_merkle_tree::AirdropMerkleTree;
pub use csv_entry::CsvEntry;
pub use error::{MerkleTreeError, Result};
pub use ledger::ClaimLedger;
pub use merkle_airdrop::{
    ledger::ClaimResult,
    merkle::{hash_leaf, verify, verify_claim, Position, ProofStep},
};
pub use merkle_tree::MerkleTree;
pub use tree_node::TreeNode;
