use anchor_lang::prelude::*;
use crate::authority::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/// Account context for replacing a drop's description. Owner only.
#[event_cpi]
#[derive(Accounts)]
#[instruction(drop_id: u64)]
pub struct SetDescription<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, DropsConfig>,

    #[account(
        mut,
        seeds = [DROP_SEED.as_bytes(), drop_id.to_le_bytes().as_ref()],
        bump = token_drop.bump
    )]
    pub token_drop: Account<'info, TokenDrop>,

    pub owner: Signer<'info>,
}

pub fn handle_set_description(
    ctx: Context<SetDescription>,
    drop_id: u64,
    description: String,
) -> Result<()> {
    authorize(
        Operation::Administer,
        &ctx.accounts.owner.key(),
        &ctx.accounts.config.owner,
        None,
        None,
    )?;

    // The account is sized for the longest description, no realloc needed
    ctx.accounts.token_drop.set_description(description.clone())?;

    emit_cpi!(DescriptionSet {
        drop_id,
        description,
    });

    Ok(())
}
