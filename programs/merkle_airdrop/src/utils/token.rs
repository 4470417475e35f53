use anchor_lang::prelude::*;
use anchor_spl::token_interface::{close_account, transfer_checked, CloseAccount, TransferChecked};

/// Accounts taking part in a checked token transfer
pub struct TokenTransfer<'a> {
    pub from: AccountInfo<'a>,
    pub to: AccountInfo<'a>,
    pub mint: AccountInfo<'a>,
    pub authority: AccountInfo<'a>,
    pub token_program: AccountInfo<'a>,
    pub decimals: u8,
}

/// Move `amount` tokens; works with both SPL Token and Token 2022
///
/// `signer_seeds` is required when the authority is a PDA (vault payouts) and
/// omitted when the authority signed the transaction (owner deposits).
pub fn transfer_token(
    transfer: TokenTransfer<'_>,
    amount: u64,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let TokenTransfer {
        from,
        to,
        mint,
        authority,
        token_program,
        decimals,
    } = transfer;

    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(token_program, cpi_accounts, seeds),
        None => CpiContext::new(token_program, cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Close a PDA-owned token account, sending its rent to `destination`
pub fn close_token_account_with_pda<'a>(
    token_account: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    authority: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if token_account.get_lamports() == 0 {
        return Ok(());
    }

    close_account(CpiContext::new_with_signer(
        token_program,
        CloseAccount {
            account: token_account,
            destination,
            authority,
        },
        signer_seeds,
    ))
}
