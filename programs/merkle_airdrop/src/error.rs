use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,

    // Claim errors
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Airdrop already claimed")]
    AlreadyClaimed,
    #[msg("Claimant does not hold the gate token")]
    NotEligible,

    // Airdrop state errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Airdrop has ended")]
    AirdropEnded,
    #[msg("Airdrop has not ended yet")]
    AirdropNotEnded,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid recipient count")]
    InvalidRecipientCount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match airdrop's token mint")]
    TokenMintMismatch,
}
