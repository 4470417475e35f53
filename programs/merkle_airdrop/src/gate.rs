use anchor_lang::prelude::*;

/**
 * Eligibility predicate consulted before a claim may change state
 *
 * The airdrop does not decide who is a holder; it only asks. Implementations
 * must be side-effect free, the ledger may call them on attempts that are later
 * rejected for other reasons.
 */
pub trait EligibilityGate {
    fn is_eligible(&self, claimant: &Pubkey) -> bool;
}

impl<F> EligibilityGate for F
where
    F: Fn(&Pubkey) -> bool,
{
    fn is_eligible(&self, claimant: &Pubkey) -> bool {
        self(claimant)
    }
}

/// Snapshot of the token account a claimant presents as proof of holding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenHolding {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

/// Admits claimants that own a non-empty token account of `required_mint`
#[derive(Clone, Copy, Debug)]
pub struct HolderGate {
    pub required_mint: Pubkey,
    pub holding: TokenHolding,
}

impl HolderGate {
    pub fn new(required_mint: Pubkey, holding: TokenHolding) -> Self {
        Self {
            required_mint,
            holding,
        }
    }
}

impl EligibilityGate for HolderGate {
    fn is_eligible(&self, claimant: &Pubkey) -> bool {
        self.holding.mint == self.required_mint
            && self.holding.owner == *claimant
            && self.holding.amount > 0
    }
}
