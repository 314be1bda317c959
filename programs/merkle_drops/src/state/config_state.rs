use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Program configuration account
 *
 * Singleton holding the administrator identity and the drop id counter.
 * Its PDA is also the token authority of every vault.
 *
 * Derivation: ["config"]
 *
 * Lifecycle:
 * 1. Created once by the initialize instruction
 * 2. drop_count incremented by every successful create_drop
 * 3. owner replaced through transfer_ownership / accept_ownership
 */
#[account]
#[derive(Default, Debug)]
pub struct DropsConfig {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing vault transfers
    pub bump: u8,

    /// Administrator of every drop
    pub owner: Pubkey,

    /// Nominated successor, `Pubkey::default()` when none
    pub pending_owner: Pubkey,

    /// Id assigned to the next drop (ids start at 0)
    pub drop_count: u64,
}

impl DropsConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<DropsConfig>();

    /// Hands out the current counter value and advances it
    pub fn allocate_drop_id(&mut self) -> Result<u64> {
        let drop_id = self.drop_count;
        self.drop_count = drop_id
            .checked_add(1)
            .ok_or(DropsError::ArithmeticOverflow)?;
        Ok(drop_id)
    }
}
