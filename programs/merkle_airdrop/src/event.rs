use anchor_lang::prelude::*;

/// Event emitted when a new airdrop is created
#[event]
pub struct AirdropCreated {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner who funded the airdrop
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Mint whose holders may claim
    pub gate_mint: Pubkey,
    /// Committed merkle root
    pub merkle_root: [u8; 32],
    /// Number of committed recipients
    pub num_recipients: u64,
    /// Amount of tokens deposited
    pub total_amount: u64,
    /// Claims are accepted until this timestamp
    pub end_time: i64,
}

/// Event emitted once per successful claim
#[event]
pub struct TokensClaimed {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens claimed
    pub amount: u64,
}

/// Event emitted when remaining tokens are withdrawn
#[event]
pub struct TokensWithdrawn {
    /// The airdrop account public key
    pub airdrop: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
}
