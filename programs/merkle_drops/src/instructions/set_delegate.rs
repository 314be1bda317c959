use anchor_lang::prelude::*;
use crate::authority::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for naming a claiming delegate
 *
 * Access Control: The account itself, or the owner on any account's behalf.
 * A delegate cannot name a further delegate.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct SetDelegate<'info> {
    /// Program config, holds the owner
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// Delegation record of the account
    /// - Derived from: ["delegate", account]
    /// - Created on first use, paid for by the authority
    #[account(
        init_if_needed,
        payer = authority,
        space = Delegation::LEN,
        seeds = [DELEGATE_SEED.as_bytes(), account.as_ref()],
        bump
    )]
    pub delegation: Account<'info, Delegation>,

    /// The account itself or the owner
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Sets or clears the delegate of an account
 *
 * @param account - The delegating account
 * @param delegate - The new delegate, `Pubkey::default()` to clear
 */
pub fn handle_set_delegate(
    ctx: Context<SetDelegate>,
    account: Pubkey,
    delegate: Pubkey,
) -> Result<()> {
    authorize(
        Operation::SetDelegate,
        &ctx.accounts.authority.key(),
        &ctx.accounts.config.owner,
        Some(&account),
        None,
    )?;

    let delegation = &mut ctx.accounts.delegation;
    delegation.bump = ctx.bumps.delegation;
    delegation.account = account;
    delegation.delegate = delegate;

    emit_cpi!(DelegateSet { account, delegate });

    Ok(())
}
