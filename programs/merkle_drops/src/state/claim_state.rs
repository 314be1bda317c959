use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Claim record for one (drop, account) pair
 *
 * This is the anti-replay ledger: once `claimed` is set it is never cleared,
 * and nothing in the program closes these accounts.
 *
 * Derivation: ["claim", drop_key, account_key]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt (using init_if_needed)
 * 2. Marked claimed in the same instruction; a failed claim rolls the
 *    creation back with everything else
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Whether the account has claimed from this drop
    pub claimed: bool,

    /// Amount paid out by the claim
    pub amount: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, DropsError::AlreadyClaimed);
        Ok(())
    }

    pub fn mark_claimed(&mut self, amount: u64) -> Result<()> {
        self.ensure_unclaimed()?;
        self.claimed = true;
        self.amount = amount;
        Ok(())
    }
}
