use anchor_lang::prelude::*;

declare_id!("AML15Dfi2FoecPpJJSTQozfZyoRfUXmk5k9jjHH2iU7i");

pub mod constants;
pub mod error;
pub mod event;
pub mod gate;
pub mod instructions;
pub mod ledger;
pub mod merkle;
pub mod state;
pub mod utils;


use instructions::*;
use merkle::ProofStep;

/**
 * Merkle Airdrop Program
 *
 * Distributes a fixed token allocation to a pre-enumerated set of recipients.
 * The full (claimant, amount) list never lives on-chain; only its merkle root
 * does, and each claimant proves membership with a sibling path.
 *
 * Key Features:
 * - Sorted-pair merkle verification, bit-exact with the off-chain tree builder
 * - One claim per claimant, enforced by a per-claimant ClaimStatus PDA
 * - Claims gated on holding a configured mint (e.g. an NFT collection token)
 * - Immutable root: a new recipient set means a new airdrop
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Airdrop PDA: Stores the committed root, gate mint and claim window
 * - Token Vault PDA: Holds tokens to be distributed
 * - Claim Status PDAs: Record whether each claimant has redeemed
 *
 * Workflow:
 * 1. Owner builds the tree off-chain and creates the airdrop with its root
 * 2. Holders claim with their amount and merkle proof
 * 3. Owner withdraws unclaimed tokens after the claim window closes
 */
#[program]
pub mod merkle_airdrop {
    use super::*;

    /**
     * Creates and funds a new airdrop
     *
     * @param ctx - Account context containing airdrop, vault, mints and owner accounts
     * @param merkle_root - Root over every (claimant, amount) leaf
     * @param num_recipients - Number of committed leaves
     * @param total_amount - Total amount of tokens deposited for distribution
     *
     * Access Control: Any signer, who becomes the owner
     */
    pub fn create_airdrop(
        ctx: Context<CreateAirdrop>,
        merkle_root: [u8; 32],
        num_recipients: u64,
        total_amount: u64,
    ) -> Result<()> {
        handle_create_airdrop(ctx, merkle_root, num_recipients, total_amount)
    }

    /**
     * Claims tokens with merkle proof verification
     *
     * @param ctx - Account context containing airdrop, claim status and token accounts
     * @param amount - Amount committed for the signer in the merkle tree
     * @param proof - Sibling path from the signer's leaf to the root
     *
     * Access Control: Gate mint holders with a valid merkle proof, once each
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, proof: Vec<ProofStep>) -> Result<()> {
        handle_claim(ctx, amount, proof)
    }

    /**
     * Withdraws unclaimed tokens after the claim window closes
     *
     * @param ctx - Account context containing airdrop, vault and owner accounts
     *
     * Access Control: Owner only
     * Note: Closes the airdrop and vault accounts; claim records are kept
     */
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        handle_withdraw(ctx)
    }
}
