use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and the claim window used throughout the airdrop program.
 */

#[constant]
/// ===== TIMING CONSTANTS =====

/// Duration of the claim window (30 days)
/// - Applied at creation to calculate end_time
/// - Value: 30 days * 24 hours * 60 minutes * 60 seconds = 2,592,000 seconds
pub const CLAIM_DURATION: i64 = 30 * 24 * 60 * 60; // 30 days in seconds

/// ===== PDA SEED CONSTANTS =====

/// Seed for airdrop PDA derivation
/// - Used in: ["airdrop", owner, merkle_root]
/// - One airdrop account per committed root and owner
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", airdrop_key]
/// - Ensures the vault is controlled by the airdrop PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", airdrop_key, claimant_key]
/// - One record per (airdrop, claimant) pair; its write lock serializes claims by the same claimant
pub const CLAIM_SEED: &str = "claim";
