use anchor_lang::prelude::*;

use crate::error::AirdropError;
use crate::gate::EligibilityGate;
use crate::merkle::{verify_claim, ProofStep};
use crate::state::ClaimStatus;

/// Outcome of a single claim attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimResult {
    /// The claim consumed the allocation; the amount may now be transferred
    Authorized(u64),
    AlreadyClaimed,
    InvalidProof,
    NotEligible,
}

impl ClaimResult {
    pub fn is_authorized(&self) -> bool {
        matches!(self, ClaimResult::Authorized(_))
    }

    /// Convert the outcome into the authorized amount or the matching program error
    pub fn into_amount(self) -> Result<u64> {
        match self {
            ClaimResult::Authorized(amount) => Ok(amount),
            ClaimResult::AlreadyClaimed => err!(AirdropError::AlreadyClaimed),
            ClaimResult::InvalidProof => err!(AirdropError::InvalidProof),
            ClaimResult::NotEligible => err!(AirdropError::NotEligible),
        }
    }
}

/**
 * Runs one claim attempt against a claimant's status record
 *
 * Check order:
 * 1. Eligibility gate for the claimant
 * 2. Claim status (a claimed record is terminal)
 * 3. Merkle proof for (claimant, amount) under root
 *
 * Only an attempt passing all three mutates `status`. The exclusive borrow is
 * the whole check-and-set, callers must hold it for the duration (the runtime
 * write lock on-chain, the per-claimant slot lock off-chain).
 */
pub fn try_claim<G: EligibilityGate + ?Sized>(
    status: &mut ClaimStatus,
    root: &[u8; 32],
    claimant: &Pubkey,
    amount: u64,
    proof: &[ProofStep],
    gate: &G,
) -> ClaimResult {
    if !gate.is_eligible(claimant) {
        return ClaimResult::NotEligible;
    }

    if status.is_claimed() {
        return ClaimResult::AlreadyClaimed;
    }

    // Root mismatch and malformed proofs are indistinguishable to the caller
    if !verify_claim(root, claimant, amount, proof) {
        return ClaimResult::InvalidProof;
    }

    status.claimed = true;
    status.amount = amount;
    ClaimResult::Authorized(amount)
}
