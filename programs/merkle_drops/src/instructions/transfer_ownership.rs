use anchor_lang::prelude::*;
use crate::authority::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for nominating a new owner
 *
 * Ownership moves in two steps: the owner nominates, the nominee accepts.
 * Until acceptance the current owner keeps every right.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    pub owner: Signer<'info>,
}

/// Account context for accepting a pending ownership transfer
#[event_cpi]
#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    pub pending_owner: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    authorize(
        Operation::Administer,
        &ctx.accounts.owner.key(),
        &config.owner,
        None,
        None,
    )?;

    // Pubkey::default() cancels a pending nomination
    config.pending_owner = new_owner;

    emit_cpi!(OwnershipTransferStarted {
        owner: config.owner,
        pending_owner: new_owner,
    });

    Ok(())
}

pub fn handle_accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let caller = ctx.accounts.pending_owner.key();
    require!(
        config.pending_owner != Pubkey::default() && config.pending_owner == caller,
        DropsError::Unauthorized
    );

    let previous_owner = config.owner;
    config.owner = caller;
    config.pending_owner = Pubkey::default();

    msg!("ownership moved from {} to {}", previous_owner, caller);

    emit_cpi!(OwnershipTransferred {
        previous_owner,
        new_owner: caller,
    });

    Ok(())
}
