use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::state::*;

/**
 * Account context for creating a token vault
 *
 * Creates the program-controlled token account that funds every drop of one
 * mint. Funding itself is a plain token transfer into the vault address,
 * made outside this program before create_drop is called.
 *
 * Access Control: Permissionless; the vault authority is always the config PDA
 */
#[derive(Accounts)]
pub struct InitVault<'info> {
    /// Program config, token authority of the vault
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// Token vault (PDA)
    /// - Derived from: ["vault", token_mint]
    #[account(
        init,
        payer = payer,
        token::mint = token_mint,
        token::authority = config,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Token mint held by the vault
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_init_vault(ctx: Context<InitVault>) -> Result<()> {
    msg!(
        "vault {} created for mint {}",
        ctx.accounts.token_vault.key(),
        ctx.accounts.token_mint.key()
    );
    Ok(())
}
