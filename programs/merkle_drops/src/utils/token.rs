use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};
use crate::constants::*;
use crate::error::*;

/// Moves `amount` out of a vault, signed by the config PDA.
///
/// Supports both SPL Token and Token 2022. A failure of the token program is
/// reported as `TransferFailed`; the runtime discards every write of the
/// calling instruction along with it.
pub fn transfer_from_vault<'a>(
    config: AccountInfo<'a>,
    config_bump: u8,
    vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    let seeds: &[&[u8]] = &[CONFIG_SEED.as_bytes(), &[config_bump]];
    let signer = &[seeds];

    let cpi_accounts = TransferChecked {
        from: vault,
        mint,
        to,
        authority: config,
    };
    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer);

    transfer_checked(cpi_ctx, amount, decimals).map_err(|err| {
        msg!("vault transfer of {} failed: {:?}", amount, err);
        error!(DropsError::TransferFailed)
    })
}
