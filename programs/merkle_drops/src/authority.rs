use anchor_lang::prelude::*;
use crate::error::*;

/// Operations gated by a role check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// initialize, gated on the program's upgrade authority
    Initialize,
    /// create_drop, set_merkle_root, set_description, recover_expired,
    /// transfer_ownership
    Administer,
    /// claim on behalf of an account
    Claim,
    /// set_delegate for an account
    SetDelegate,
}

/// Role verdict for `caller` attempting `op`.
///
/// `account` is the account the operation acts for (the claimant or the
/// delegating account) and `delegate` its registered claiming agent, if any.
/// Delegates are honoured for claims only and are never transitive.
/// For `Initialize`, `owner` is the program's upgrade authority.
pub fn authorize(
    op: Operation,
    caller: &Pubkey,
    owner: &Pubkey,
    account: Option<&Pubkey>,
    delegate: Option<&Pubkey>,
) -> Result<()> {
    let is_account = account.is_some_and(|account| account == caller);
    let allowed = match op {
        Operation::Initialize | Operation::Administer => caller == owner,
        Operation::Claim => is_account || delegate.is_some_and(|delegate| delegate == caller),
        Operation::SetDelegate => is_account || caller == owner,
    };

    require!(allowed, DropsError::Unauthorized);
    Ok(())
}

/// Only the upgrade authority may create the config; a program without one
/// (frozen) cannot be initialized
pub fn authorize_initialize(caller: &Pubkey, upgrade_authority: Option<&Pubkey>) -> Result<()> {
    let upgrade_authority = upgrade_authority.ok_or(DropsError::Unauthorized)?;
    authorize(Operation::Initialize, caller, upgrade_authority, None, None)
}
