use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::authority::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{leaf_hash, now, transfer_from_vault, verify};

/**
 * Account context for claiming an allocation
 *
 * This instruction pays out one (account, index, amount) allocation of a drop
 * once the caller proves it is in the drop's merkle tree. Each account can
 * claim from a drop exactly once.
 *
 * Access Control: The account itself, or its registered delegate
 *
 * The recipient token account may belong to anyone, so a delegate can route
 * the tokens to itself or elsewhere.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(drop_id: u64, account: Pubkey)]
pub struct Claim<'info> {
    /// Program config, token authority of the vault
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// The drop being claimed from
    /// - Will be modified to update claimed_amount
    #[account(
        mut,
        seeds = [DROP_SEED.as_bytes(), drop_id.to_le_bytes().as_ref()],
        bump = token_drop.bump
    )]
    pub token_drop: Account<'info, TokenDrop>,

    /// Claim record for this (drop, account) pair
    /// - Derived from: ["claim", drop_key, account]
    /// - Created on first use, paid for by the caller
    #[account(
        init_if_needed,
        payer = caller,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), token_drop.key().as_ref(), account.as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// The account's delegation, required only when a delegate is claiming
    /// - Derived from: ["delegate", account]
    #[account(
        seeds = [DELEGATE_SEED.as_bytes(), account.as_ref()],
        bump
    )]
    pub delegation: Option<Account<'info, Delegation>>,

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

    /// Token account receiving the allocation
    #[account(
        mut,
        token::mint = token_drop.token_mint,
        token::token_program = token_program,
    )]
    pub recipient: InterfaceAccount<'info, TokenAccount>,

    /// The token mint for verification
    /// - Must match the drop's token mint
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == token_drop.token_mint @ DropsError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The account or its delegate
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim with merkle proof verification
 *
 * @param ctx - The account context containing all required accounts
 * @param drop_id - Id of the drop
 * @param account - Account the allocation was made to
 * @param amount - Allocated amount, exactly as committed in the tree
 * @param proof - Sibling hashes from the leaf up to the root
 * @param index - Position of the allocation in the off-chain list
 *
 * Validation Process (each a distinct error, in this order):
 * 1. Caller is the account or its delegate
 * 2. Merkle root is set
 * 3. Claim window has started
 * 4. Claim window has not ended
 * 5. Account has not claimed from this drop
 * 6. Proof verifies for keccak(account, index, amount)
 * 7. Drop total is not exceeded
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    drop_id: u64,
    account: Pubkey,
    amount: u64,
    proof: Vec<[u8; 32]>,
    index: u64,
) -> Result<()> {
    let delegate = ctx
        .accounts
        .delegation
        .as_ref()
        .and_then(|delegation| delegation.delegate());

    // ===== VALIDATION & EFFECTS PHASE (State Updates) =====

    // Ledger is updated before the transfer is issued
    ctx.accounts.claim_record.bump = ctx.bumps.claim_record;
    let claimed_amount = apply_claim(
        &mut ctx.accounts.token_drop,
        &mut ctx.accounts.claim_record,
        &ctx.accounts.caller.key(),
        &ctx.accounts.config.owner,
        delegate.as_ref(),
        now()?,
        &ClaimArgs {
            account,
            amount,
            proof: &proof,
            index,
        },
    )?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    transfer_from_vault(
        ctx.accounts.config.to_account_info(),
        ctx.accounts.config.bump,
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.recipient.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    msg!(
        "drop {}: {} claimed {} ({} of {} paid out)",
        drop_id,
        account,
        amount,
        claimed_amount,
        ctx.accounts.token_drop.total_amount
    );

    emit_cpi!(Claimed::new(
        drop_id,
        account,
        ctx.accounts.recipient.owner,
        amount
    ));

    Ok(())
}

/// Allocation being claimed, as committed in the drop's merkle tree
pub struct ClaimArgs<'a> {
    pub account: Pubkey,
    pub amount: u64,
    pub proof: &'a [[u8; 32]],
    pub index: u64,
}

/// Checks a claim and records it in the ledger.
///
/// Returns the drop's new claimed total. On error nothing has been written.
pub fn apply_claim(
    token_drop: &mut TokenDrop,
    claim_record: &mut ClaimRecord,
    caller: &Pubkey,
    owner: &Pubkey,
    delegate: Option<&Pubkey>,
    now: u64,
    args: &ClaimArgs,
) -> Result<u64> {
    authorize(
        Operation::Claim,
        caller,
        owner,
        Some(&args.account),
        delegate,
    )?;

    token_drop.check_claimable(now)?;
    claim_record.ensure_unclaimed()?;

    let leaf = leaf_hash(&args.account, args.index, args.amount);
    require!(
        verify(args.proof, token_drop.merkle_root, leaf),
        DropsError::InvalidProof
    );

    let claimed_amount = token_drop.record_claim(args.amount)?;
    claim_record.mark_claimed(args.amount)?;
    Ok(claimed_amount)
}
