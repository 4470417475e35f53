use anchor_lang::prelude::*;

use crate::error::AirdropError;

/**
 * Published airdrop commitment
 *
 * Holds the merkle root of every (claimant, amount) pair eligible for this
 * airdrop. The root is written once at creation; there is no instruction that
 * changes it, a different recipient set requires a new airdrop.
 *
 * Derivation: ["airdrop", owner, merkle_root]
 *
 * Lifecycle:
 * 1. Created and funded during create_airdrop
 * 2. Read (never written) by claims, so claims by different users only contend on their own ClaimStatus
 * 3. Closed during withdraw after end_time
 */
#[account]
#[derive(Default, Debug)]
pub struct MerkleAirdrop {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Owner who funded the airdrop
    /// - Can withdraw remaining tokens after end_time
    pub owner: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA holding the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    pub token_vault: Pubkey,

    /// Mint whose holders are allowed to claim
    /// - A claimant must present a non-empty token account of this mint
    pub gate_mint: Pubkey,

    /// Merkle root over all (claimant, amount) leaves
    pub merkle_root: [u8; 32],

    /// Number of leaves committed under merkle_root
    pub num_recipients: u64,

    /// Tokens deposited at creation; equals the sum of all leaf amounts
    pub total_amount: u64,

    /// Unix timestamp after which claims stop and withdraw becomes possible
    /// - Set to creation time + CLAIM_DURATION
    pub end_time: i64,
}

impl MerkleAirdrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<MerkleAirdrop>();

    /// Pre-ledger checks for a claim of `amount` at `now`
    /// - Window first, then amount, then vault balance
    pub fn check_claimable(&self, now: i64, amount: u64, vault_balance: u64) -> Result<()> {
        require!(now <= self.end_time, AirdropError::AirdropEnded);
        require!(amount > 0, AirdropError::InvalidAmount);
        require!(vault_balance >= amount, AirdropError::InsufficientVaultBalance);
        Ok(())
    }
}
