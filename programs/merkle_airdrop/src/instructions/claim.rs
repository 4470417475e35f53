use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::gate::{HolderGate, TokenHolding};
use crate::ledger::try_claim;
use crate::merkle::ProofStep;
use crate::constants::*;
use crate::utils::{transfer_token, TokenTransfer};
use crate::event::*;

/**
 * Account context for claiming tokens
 *
 * The claimant is the transaction signer; the leaf being proven is always
 * (claimant, amount), so nobody can redeem someone else's allocation.
 *
 * Access Control: Holders of the gate mint with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop account containing the committed root
    /// - Read only, claims never write to it
    pub airdrop: Account<'info, MerkleAirdrop>,

    /// Claim status for this claimant
    /// - Derived from: ["claim", airdrop_key, claimant_key]
    /// - Runtime write lock on this account makes the check-and-set atomic per claimant
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), airdrop.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the tokens to be distributed
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Token account presented as proof of holding the gate mint
    /// - Checked by the eligibility gate, not by constraints, so a mismatch reports NotEligible
    pub gate_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The claimant attempting to claim tokens
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a token claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount committed for the claimant in the merkle tree
 * @param proof - Sibling path from the claimant's leaf to the root
 *
 * Validation Process:
 * 1. Claim window still open and vault can cover the amount
 * 2. Eligibility gate, claim status and merkle proof (see ledger::try_claim)
 * 3. Transfer the authorized amount from the vault
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<ProofStep>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====

    let current_time = Clock::get()?.unix_timestamp;
    airdrop.check_claimable(current_time, amount, ctx.accounts.token_vault.amount)?;

    let merkle_root = airdrop.merkle_root;
    let owner_key = airdrop.owner;
    let airdrop_bump = airdrop.bump;
    let airdrop_key = airdrop.key();
    let claimant_key = ctx.accounts.claimant.key();

    let holder = &ctx.accounts.gate_token_account;
    let gate = HolderGate::new(
        airdrop.gate_mint,
        TokenHolding {
            mint: holder.mint,
            owner: holder.owner,
            amount: holder.amount,
        },
    );

    // ===== EFFECTS PHASE (claim status) =====

    let claimed_amount = try_claim(
        &mut ctx.accounts.claim_status,
        &merkle_root,
        &claimant_key,
        amount,
        &proof,
        &gate,
    )
    .into_amount()?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        owner_key.as_ref(),
        merkle_root.as_ref(),
        &[airdrop_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        TokenTransfer {
            from: ctx.accounts.token_vault.to_account_info(),
            to: ctx.accounts.claimant_token_account.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            authority: ctx.accounts.airdrop.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            decimals: ctx.accounts.token_mint.decimals,
        },
        claimed_amount,
        Some(signer),
    )?;

    msg!("Claimed {} tokens for {}", claimed_amount, claimant_key);

    emit_cpi!(TokensClaimed {
        airdrop: airdrop_key,
        claimant: claimant_key,
        amount: claimed_amount,
    });

    Ok(())
}
