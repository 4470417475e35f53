use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, TokenTransfer};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new airdrop
 *
 * This instruction publishes a merkle root and funds the airdrop:
 * - Creates the airdrop PDA holding the root, the gate mint and the claim window
 * - Creates a token vault PDA to hold the tokens to be distributed
 * - Transfers the total amount from owner to the vault
 *
 * Access Control: Anyone can create an airdrop, they become its owner
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(merkle_root: [u8; 32])]
pub struct CreateAirdrop<'info> {
    /// The airdrop account (PDA)
    /// - Stores the committed merkle root and distribution parameters
    /// - Derived from: ["airdrop", owner, merkle_root]
    #[account(
        init,
        payer = owner,
        space = MerkleAirdrop::LEN,
        seeds = [
            AIRDROP_SEED.as_bytes(),
            owner.key().as_ref(),
            merkle_root.as_ref()
        ],
        bump
    )]
    pub airdrop: Account<'info, MerkleAirdrop>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the airdrop PDA as token authority
    /// - Derived from: ["vault", airdrop_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = airdrop,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), airdrop.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for the tokens being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Mint whose holders are allowed to claim
    /// - May belong to either token program
    pub gate_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the tokens to be deposited
    /// - Must be owned by the owner signer
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the airdrop
    /// - Can withdraw remaining tokens after the claim window closes
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new airdrop committed to `merkle_root`
 *
 * @param ctx - The account context containing all required accounts
 * @param merkle_root - Root over every (claimant, amount) leaf
 * @param num_recipients - Number of committed leaves
 * @param total_amount - Sum of all leaf amounts, deposited into the vault
 */
pub fn handle_create_airdrop(
    ctx: Context<CreateAirdrop>,
    merkle_root: [u8; 32],
    num_recipients: u64,
    total_amount: u64,
) -> Result<()> {
    // ===== VALIDATION PHASE =====

    // An all-zero root cannot have been produced by the tree builder
    require!(merkle_root != [0; 32], AirdropError::InvalidMerkleRoot);
    require!(total_amount > 0, AirdropError::InvalidAmount);
    require!(num_recipients > 0, AirdropError::InvalidRecipientCount);

    let current_time = Clock::get()?.unix_timestamp;
    let end_time = current_time
        .checked_add(CLAIM_DURATION)
        .ok_or(AirdropError::ArithmeticOverflow)?;

    // ===== EFFECTS PHASE =====

    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.bump = ctx.bumps.airdrop;
    airdrop.owner = ctx.accounts.owner.key();
    airdrop.token_mint = ctx.accounts.token_mint.key();
    airdrop.token_vault = ctx.accounts.token_vault.key();
    airdrop.gate_mint = ctx.accounts.gate_mint.key();
    airdrop.merkle_root = merkle_root;
    airdrop.num_recipients = num_recipients;
    airdrop.total_amount = total_amount;
    airdrop.end_time = end_time;

    // ===== INTERACTIONS PHASE =====

    transfer_token(
        TokenTransfer {
            from: ctx.accounts.owner_token_account.to_account_info(),
            to: ctx.accounts.token_vault.to_account_info(),
            mint: ctx.accounts.token_mint.to_account_info(),
            authority: ctx.accounts.owner.to_account_info(),
            token_program: ctx.accounts.token_program.to_account_info(),
            decimals: ctx.accounts.token_mint.decimals,
        },
        total_amount,
        None, // Owner signs the deposit directly
    )?;

    msg!(
        "Airdrop created: {} recipients, {} tokens, ends at {}",
        num_recipients,
        total_amount,
        end_time
    );

    emit_cpi!(AirdropCreated {
        airdrop: ctx.accounts.airdrop.key(),
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        gate_mint: ctx.accounts.gate_mint.key(),
        merkle_root,
        num_recipients,
        total_amount,
        end_time,
    });

    Ok(())
}
