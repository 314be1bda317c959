use anchor_lang::prelude::*;
use crate::authority::*;
use crate::constants::*;
use crate::error::*;
use crate::state::*;

/**
 * Account context for initializing the program config
 *
 * Creates the singleton config PDA that records the administrator and the
 * drop counter. Can only succeed once since the PDA address is fixed.
 *
 * Access Control: The program's upgrade authority only, so the config
 * cannot be front-run between deployment and initialization.
 */
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Program config (PDA)
    /// - Derived from: ["config"]
    #[account(
        init,
        payer = payer,
        space = DropsConfig::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// Pays for the config account, must be the upgrade authority
    #[account(mut)]
    pub payer: Signer<'info>,

    /// This program, to locate its program data account
    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, crate::program::MerkleDrops>,

    /// Program data account holding the upgrade authority
    pub program_data: Account<'info, ProgramData>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
    authorize_initialize(
        &ctx.accounts.payer.key(),
        ctx.accounts.program_data.upgrade_authority_address.as_ref(),
    )?;
    require!(owner != Pubkey::default(), DropsError::InvalidInput);

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.owner = owner;
    config.pending_owner = Pubkey::default();
    config.drop_count = 0;

    msg!("drops initialized, owner {}", owner);
    Ok(())
}
