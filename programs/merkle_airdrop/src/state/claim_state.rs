use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * One record per (airdrop, claimant) pair. Absent or `claimed == false` means
 * unclaimed; a successful claim flips it to true exactly once.
 *
 * Derivation: ["claim", airdrop_key, claimant_key]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed); a failed attempt rolls the creation back
 * 2. Set to claimed by the first successful claim
 * 3. Never reset and never closed, so replays are rejected even after withdraw
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct ClaimStatus {
    /// Whether this claimant has redeemed their allocation
    pub claimed: bool,
    /// Amount authorized by the redeeming claim
    pub amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }
}
