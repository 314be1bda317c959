use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::authority::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{now, transfer_from_vault};

/**
 * Account context for recovering an expired drop's remainder
 *
 * This instruction returns the unclaimed part of a drop to the owner once
 * its claim window has closed.
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - Only after the window has ended (current_time > expires_at)
 * - Recovers total_amount - claimed_amount
 * - Marks the drop fully paid out, so it can be recovered only once
 * - The drop account is kept; drops are never deleted
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(drop_id: u64)]
pub struct RecoverExpired<'info> {
    /// Program config, token authority of the vault
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// The expired drop
    /// - Derived from: ["drop", drop_id]
    #[account(
        mut,
        seeds = [DROP_SEED.as_bytes(), drop_id.to_le_bytes().as_ref()],
        bump = token_drop.bump
    )]
    pub token_drop: Account<'info, TokenDrop>,

    /// Vault holding the drop's tokens
    /// - Derived from: ["vault", token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), token_drop.token_mint.as_ref()],
        bump,
        token::mint = token_mint,
        token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account receiving the remainder
    #[account(
        mut,
        token::mint = token_drop.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the drop's token mint
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == token_drop.token_mint @ DropsError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Recovers the unclaimed remainder of an expired drop
 *
 * @returns The amount transferred back to the owner
 */
pub fn handle_recover_expired(ctx: Context<RecoverExpired>, drop_id: u64) -> Result<u64> {
    authorize(
        Operation::Administer,
        &ctx.accounts.owner.key(),
        &ctx.accounts.config.owner,
        None,
        None,
    )?;

    // ===== VALIDATION & EFFECTS PHASE =====

    let token_drop = &mut ctx.accounts.token_drop;
    let remainder = token_drop.recover(now()?)?;
    let token = token_drop.token_mint;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    transfer_from_vault(
        ctx.accounts.config.to_account_info(),
        ctx.accounts.config.bump,
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        remainder,
        ctx.accounts.token_mint.decimals,
    )?;

    msg!("drop {}: recovered {} after expiry", drop_id, remainder);

    emit_cpi!(ExpiredTokensRecovered {
        drop_id,
        token,
        amount: remainder,
    });

    Ok(remainder)
}
