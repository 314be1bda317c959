use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::authority::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::now;

/**
 * Account context for creating a new drop
 *
 * This instruction registers a new distribution campaign:
 * - Allocates the next sequential drop id from the config counter
 * - Creates the drop PDA for that id
 * - Checks that the mint's vault already holds at least the drop total
 *   (funds are not moved here, they must already be present)
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDrop<'info> {
    /// Program config
    /// - drop_count is both the new id and the seed of the drop PDA
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// The new drop account (PDA)
    /// - Derived from: ["drop", config.drop_count]
    #[account(
        init,
        payer = owner,
        space = TokenDrop::LEN,
        seeds = [DROP_SEED.as_bytes(), config.drop_count.to_le_bytes().as_ref()],
        bump
    )]
    pub token_drop: Account<'info, TokenDrop>,

    /// Vault funding the drop
    /// - Derived from: ["vault", token_mint]
    #[account(
        seeds = [VAULT_SEED.as_bytes(), token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::token_program = token_program,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint distributed by the drop
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The administrator, pays for the drop account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new drop and returns its id
 *
 * @param ctx - The account context containing all required accounts
 * @param description - Administrative label, at most 384 bytes
 * @param start_time - Unix timestamp the claim window opens, 0 for now
 * @param duration - Length of the claim window in seconds, must be > 0
 * @param total_amount - Total distributable amount, must be > 0
 * @param merkle_root - Allocation root, all zeros to set it later
 */
pub fn handle_create_drop(
    ctx: Context<CreateDrop>,
    description: String,
    start_time: u64,
    duration: u64,
    total_amount: u64,
    merkle_root: [u8; 32],
) -> Result<u64> {
    ctx.accounts.token_drop.bump = ctx.bumps.token_drop;
    let drop_id = register_drop(
        &mut ctx.accounts.config,
        &mut ctx.accounts.token_drop,
        &ctx.accounts.owner.key(),
        ctx.accounts.token_mint.key(),
        ctx.accounts.token_vault.amount,
        now()?,
        DropParams {
            description: description.clone(),
            start_time,
            duration,
            total_amount,
            merkle_root,
        },
    )?;

    let token_drop = &ctx.accounts.token_drop;
    msg!(
        "drop {} created: {} of mint {} claimable {}..={}",
        drop_id,
        total_amount,
        token_drop.token_mint,
        token_drop.starts_at,
        token_drop.expires_at
    );

    emit_cpi!(DropCreated {
        drop_id,
        token: token_drop.token_mint,
        starts_at: token_drop.starts_at,
        expires_at: token_drop.expires_at,
        total_amount,
    });

    if merkle_root != [0; 32] {
        emit_cpi!(MerkleRootSet {
            drop_id,
            merkle_root,
        });
    }

    if !description.is_empty() {
        emit_cpi!(DescriptionSet {
            drop_id,
            description,
        });
    }

    Ok(drop_id)
}

/// Parameters of a new drop, as passed to create_drop
pub struct DropParams {
    pub description: String,
    pub start_time: u64,
    pub duration: u64,
    pub total_amount: u64,
    pub merkle_root: [u8; 32],
}

/// Validates a new drop and writes it into `token_drop`.
///
/// Returns the allocated drop id. On error neither the config counter nor
/// the drop has been written.
pub fn register_drop(
    config: &mut DropsConfig,
    token_drop: &mut TokenDrop,
    caller: &Pubkey,
    token_mint: Pubkey,
    vault_amount: u64,
    now: u64,
    params: DropParams,
) -> Result<u64> {
    authorize(Operation::Administer, caller, &config.owner, None, None)?;

    // ===== VALIDATION PHASE =====

    TokenDrop::validate_description(&params.description)?;
    require!(params.total_amount > 0, DropsError::InvalidInput);

    let (starts_at, expires_at) =
        TokenDrop::schedule(now, params.start_time, params.duration)?;

    // Funding must already sit in the vault
    TokenDrop::check_funding(vault_amount, params.total_amount)?;

    // ===== EFFECTS PHASE =====

    let drop_id = config.allocate_drop_id()?;

    token_drop.id = drop_id;
    token_drop.token_mint = token_mint;
    token_drop.starts_at = starts_at;
    token_drop.expires_at = expires_at;
    token_drop.total_amount = params.total_amount;
    token_drop.claimed_amount = 0;
    token_drop.merkle_root = params.merkle_root;
    token_drop.description = params.description;

    Ok(drop_id)
}
