use anchor_lang::prelude::*;
use crate::authority::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting a drop's merkle root
 *
 * Access Control: Owner only
 *
 * Business Logic:
 * - The root commits to every (account, index, amount) entry of the drop
 * - The root may be rewritten at any time, including after claims started;
 *   existing claim records are untouched, but proofs issued for the old root
 *   stop verifying and claimants must fetch proofs for the live root
 * - Writing the all-zero root suspends claims until a real root is set
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(drop_id: u64)]
pub struct SetMerkleRoot<'info> {
    /// Program config, holds the owner
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    /// The drop to update
    /// - Derived from: ["drop", drop_id]
    #[account(
        mut,
        seeds = [DROP_SEED.as_bytes(), drop_id.to_le_bytes().as_ref()],
        bump = token_drop.bump
    )]
    pub token_drop: Account<'info, TokenDrop>,

    pub owner: Signer<'info>,
}

/**
 * Sets the merkle root of a drop
 *
 * Merkle Tree Structure:
 * - Each leaf: keccak(account || index (u64 LE) || amount (u64 LE))
 * - Intermediate nodes: keccak of the pair in ascending byte order
 */
pub fn handle_set_merkle_root(
    ctx: Context<SetMerkleRoot>,
    drop_id: u64,
    merkle_root: [u8; 32],
) -> Result<()> {
    authorize(
        Operation::Administer,
        &ctx.accounts.owner.key(),
        &ctx.accounts.config.owner,
        None,
        None,
    )?;

    let token_drop = &mut ctx.accounts.token_drop;
    token_drop.merkle_root = merkle_root;

    msg!("drop {} merkle root set", drop_id);

    emit_cpi!(MerkleRootSet {
        drop_id,
        merkle_root,
    });

    Ok(())
}
