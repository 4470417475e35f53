use anchor_lang::prelude::Pubkey;
use merkle_airdrop::{
    gate::EligibilityGate,
    ledger::{try_claim, ClaimResult},
    merkle::{verify_claim, ProofStep},
    state::ClaimStatus,
};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};
use tracing::{debug, info};

/// Host-side claim ledger keyed by recipient.
///
/// Mirrors the program's ClaimStatus PDAs for dry runs and off-chain services.
/// The map lock is held only to look up a recipient's slot; the slot lock is
/// held across the whole check-and-set, so two attempts for the same recipient
/// are serialized while attempts for different recipients are not. Slots exist
/// only for recipients that passed the gate and proof at least once.
#[derive(Debug, Default)]
pub struct ClaimLedger {
    slots: Mutex<HashMap<Pubkey, Arc<Mutex<ClaimStatus>>>>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, recipient: &Pubkey) -> Arc<Mutex<ClaimStatus>> {
        lock(&self.slots).entry(*recipient).or_default().clone()
    }

    pub fn try_claim<G: EligibilityGate + ?Sized>(
        &self,
        recipient: &Pubkey,
        amount: u64,
        proof: &[ProofStep],
        root: &[u8; 32],
        gate: &G,
    ) -> ClaimResult {
        // Only a claim that can succeed gets a slot; rejected keys leave no trace
        let eligible = gate.is_eligible(recipient);
        let proven = eligible && verify_claim(root, recipient, amount, proof);
        let slot = if proven {
            Some(self.slot(recipient))
        } else {
            lock(&self.slots).get(recipient).cloned()
        };

        let result = match slot {
            Some(slot) => {
                let mut status = lock(&slot);
                try_claim(&mut status, root, recipient, amount, proof, gate)
            }
            None if !eligible => ClaimResult::NotEligible,
            None => ClaimResult::InvalidProof,
        };

        match result {
            ClaimResult::Authorized(amount) => info!(%recipient, amount, "Claim authorized"),
            rejected => debug!(%recipient, ?rejected, "Claim rejected"),
        }
        result
    }

    pub fn is_claimed(&self, recipient: &Pubkey) -> bool {
        let slot = lock(&self.slots).get(recipient).cloned();
        match slot {
            Some(slot) => {
                let status = lock(&slot);
                status.is_claimed()
            }
            None => false,
        }
    }

    pub fn claimed_count(&self) -> usize {
        let slots: Vec<_> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| lock(slot).is_claimed()).count()
    }
}

// A panic while holding a slot cannot leave a half-written ClaimStatus
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use merkle_airdrop::merkle::{hash_leaf, hash_pair};
    use std::thread;

    fn allow_all(_: &Pubkey) -> bool {
        true
    }

    #[test]
    fn test_claim_once() {
        let recipient = Pubkey::new_unique();
        let sibling = hash_leaf(&Pubkey::new_unique(), 1);
        let leaf = hash_leaf(&recipient, 10);
        let root = hash_pair(&leaf, &sibling);
        let proof = vec![ProofStep::new(sibling, &leaf)];

        let ledger = ClaimLedger::new();
        assert!(!ledger.is_claimed(&recipient));
        assert_eq!(
            ledger.try_claim(&recipient, 10, &proof, &root, &allow_all),
            ClaimResult::Authorized(10)
        );
        assert!(ledger.is_claimed(&recipient));
        assert_eq!(
            ledger.try_claim(&recipient, 10, &proof, &root, &allow_all),
            ClaimResult::AlreadyClaimed
        );
        assert_eq!(ledger.claimed_count(), 1);
    }

    #[test]
    fn test_failed_attempts_do_not_mark_claimed() {
        let recipient = Pubkey::new_unique();
        let root = hash_leaf(&recipient, 10);
        let ledger = ClaimLedger::new();

        assert_eq!(
            ledger.try_claim(&recipient, 11, &[], &root, &allow_all),
            ClaimResult::InvalidProof
        );
        assert_eq!(
            ledger.try_claim(&recipient, 10, &[], &root, &|_: &Pubkey| false),
            ClaimResult::NotEligible
        );
        assert!(!ledger.is_claimed(&recipient));
        assert_eq!(ledger.claimed_count(), 0);
    }

    #[test]
    fn test_rejected_attempts_leave_no_slots() {
        let listed = Pubkey::new_unique();
        let root = hash_leaf(&listed, 10);
        let ledger = ClaimLedger::new();

        for _ in 0..1000 {
            let stranger = Pubkey::new_unique();
            assert_eq!(
                ledger.try_claim(&stranger, 10, &[], &root, &|_: &Pubkey| false),
                ClaimResult::NotEligible
            );
            assert_eq!(
                ledger.try_claim(&stranger, 10, &[], &root, &allow_all),
                ClaimResult::InvalidProof
            );
        }
        assert_eq!(lock(&ledger.slots).len(), 0);

        assert!(ledger.try_claim(&listed, 10, &[], &root, &allow_all).is_authorized());
        assert_eq!(lock(&ledger.slots).len(), 1);
    }

    #[test]
    fn test_claimed_recipient_with_bad_proof_sees_already_claimed() {
        let recipient = Pubkey::new_unique();
        let root = hash_leaf(&recipient, 5);
        let ledger = ClaimLedger::new();

        assert!(ledger.try_claim(&recipient, 5, &[], &root, &allow_all).is_authorized());
        assert_eq!(
            ledger.try_claim(&recipient, 6, &[], &root, &allow_all),
            ClaimResult::AlreadyClaimed
        );
        assert_eq!(
            ledger.try_claim(&recipient, 5, &[], &root, &|_: &Pubkey| false),
            ClaimResult::NotEligible
        );
    }

    #[test]
    fn test_concurrent_claims_for_same_recipient() {
        let recipient = Pubkey::new_unique();
        let root = hash_leaf(&recipient, 77);
        let ledger = ClaimLedger::new();

        let results: Vec<ClaimResult> = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| ledger.try_claim(&recipient, 77, &[], &root, &allow_all)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let authorized = results.iter().filter(|r| r.is_authorized()).count();
        assert_eq!(authorized, 1);
        assert!(results
            .iter()
            .all(|r| r.is_authorized() || *r == ClaimResult::AlreadyClaimed));
    }
}
