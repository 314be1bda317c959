use anchor_lang::prelude::*;

/// Claiming delegate of an account.
///
/// Derivation: ["delegate", account_key]
///
/// A delegate may claim on the account's behalf but cannot name a further
/// delegate. Overwritten by every set_delegate call.
#[account]
#[derive(Default, Debug)]
pub struct Delegation {
    pub bump: u8,

    /// The account whose claims may be delegated
    pub account: Pubkey,

    /// Authorized claiming agent, `Pubkey::default()` when cleared
    pub delegate: Pubkey,
}

impl Delegation {
    pub const LEN: usize = 8 + std::mem::size_of::<Delegation>();

    pub fn delegate(&self) -> Option<Pubkey> {
        (self.delegate != Pubkey::default()).then_some(self.delegate)
    }
}
