use anchor_lang::prelude::Pubkey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerkleTreeError {
    #[error("Empty input provided")]
    EmptyInput,
    #[error("Index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },
    #[error("Duplicate recipient: {0}")]
    DuplicateRecipient(Pubkey),
    #[error("Recipient not found: {0}")]
    RecipientNotFound(Pubkey),
    #[error("Line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },
    #[error("Line {line}: invalid address `{value}`")]
    InvalidAddress { line: u64, value: String },
    #[error("Line {line}: invalid amount `{value}`")]
    InvalidAmount { line: u64, value: String },
    #[error("Invalid leaf: {recipient} with amount {amount}")]
    InvalidLeaf { recipient: Pubkey, amount: u64 },
    #[error("Proof for {recipient} does not fold back to the root")]
    InvalidProof { recipient: Pubkey },
    #[error("Arithmetic Error (overflow/underflow)")]
    ArithmeticError,
    #[error("Merkle root mismatch: artifact has {expected}, leaves hash to {computed}")]
    RootMismatch { expected: String, computed: String },
    #[error("csv Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serde Error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MerkleTreeError>;
