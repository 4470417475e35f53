use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{close_token_account_with_pda, transfer_token, TokenTransfer};
use crate::event::*;

/**
 * Account context for withdrawing remaining tokens
 *
 * Lets the owner recover unclaimed tokens once the claim window has closed.
 * The vault and airdrop accounts are closed; ClaimStatus accounts are left in
 * place so a claimant can never redeem twice against the same root.
 *
 * Access Control: Only the owner can withdraw remaining tokens
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The airdrop account to withdraw from and close
    #[account(
        mut,
        close = owner
    )]
    pub airdrop: Account<'info, MerkleAirdrop>,

    /// Token vault containing the remaining tokens
    /// - Derived from: ["vault", airdrop_key]
    /// - Will be emptied and closed
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the remaining tokens
    #[account(
        mut,
        token::mint = airdrop.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == airdrop.token_mint @ AirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the airdrop
    /// - Receives the remaining tokens and reclaimed rent
    #[account(
        mut,
        constraint = owner.key() == airdrop.owner @ AirdropError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Withdraws remaining tokens from the airdrop
 *
 * @param ctx - The account context containing all required accounts
 *
 * Validation Rules:
 * - The claim window must have closed
 * - Only the owner can call this function
 */
pub fn handle_withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let airdrop = &ctx.accounts.airdrop;

    // ===== VALIDATION PHASE =====

    let current_time = Clock::get()?.unix_timestamp;
    require!(current_time > airdrop.end_time, AirdropError::AirdropNotEnded);

    let remaining_balance = ctx.accounts.token_vault.amount;

    // ===== INTERACTIONS PHASE (Token Transfer and Cleanup) =====

    let seeds = &[
        AIRDROP_SEED.as_bytes(),
        airdrop.owner.as_ref(),
        airdrop.merkle_root.as_ref(),
        &[airdrop.bump],
    ];
    let signer = &[&seeds[..]];

    if remaining_balance > 0 {
        transfer_token(
            TokenTransfer {
                from: ctx.accounts.token_vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
                authority: ctx.accounts.airdrop.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                decimals: ctx.accounts.token_mint.decimals,
            },
            remaining_balance,
            Some(signer),
        )?;
    }

    close_token_account_with_pda(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.airdrop.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    msg!("Withdrew {} unclaimed tokens", remaining_balance);

    emit_cpi!(TokensWithdrawn {
        airdrop: airdrop.key(),
        owner: ctx.accounts.owner.key(),
        amount_withdrawn: remaining_balance,
    });

    // The airdrop account itself is closed by the close = owner constraint
    Ok(())
}
