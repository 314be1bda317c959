use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Drop state account
 *
 * One distribution campaign: a fixed total of one token, gated by a merkle
 * root and a claim window.
 *
 * Derivation: ["drop", drop_id (u64 LE)]
 *
 * Lifecycle:
 * 1. Created by create_drop with claimed_amount = 0
 * 2. merkle_root and description may be rewritten by the owner at any time
 * 3. claimed_amount grows with each claim while the window is open
 * 4. recover_expired pushes claimed_amount to total_amount once the window
 *    has closed; drops are never closed
 *
 * Invariants:
 * - starts_at <= expires_at
 * - total_amount > 0
 * - claimed_amount <= total_amount
 */
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct TokenDrop {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Sequential id, also part of the PDA seeds
    pub id: u64,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Start of the claim window (unix seconds, inclusive)
    pub starts_at: u64,

    /// End of the claim window (unix seconds, inclusive)
    /// - Always starts_at + duration
    pub expires_at: u64,

    /// Cap on the value paid out by this drop
    pub total_amount: u64,

    /// Running total paid out by claims (and recovery)
    pub claimed_amount: u64,

    /// Root of the allocation tree, all zeros while unset
    pub merkle_root: [u8; 32],

    /// Administrative label, no effect on claims
    #[max_len(384)]
    pub description: String,
}

impl TokenDrop {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + InitSpace size
    pub const LEN: usize = 8 + TokenDrop::INIT_SPACE;

    /// Resolves the claim window for a new drop.
    ///
    /// A `start_time` of 0 means "now". Returns `(starts_at, expires_at)`.
    pub fn schedule(now: u64, start_time: u64, duration: u64) -> Result<(u64, u64)> {
        let starts_at = if start_time == 0 { now } else { start_time };
        require!(starts_at >= now, DropsError::InvalidInput);
        require!(duration > 0, DropsError::InvalidInput);

        let expires_at = starts_at
            .checked_add(duration)
            .ok_or(DropsError::ArithmeticOverflow)?;
        Ok((starts_at, expires_at))
    }

    pub fn validate_description(description: &str) -> Result<()> {
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            DropsError::InvalidInput
        );
        Ok(())
    }

    pub fn set_description(&mut self, description: String) -> Result<()> {
        Self::validate_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn has_root(&self) -> bool {
        self.merkle_root != [0; 32]
    }

    /// The vault must already hold the drop's total
    pub fn check_funding(vault_amount: u64, total_amount: u64) -> Result<()> {
        require!(
            vault_amount >= total_amount,
            DropsError::InsufficientFunding
        );
        Ok(())
    }

    /// Checks the root and the claim window, in that order
    pub fn check_claimable(&self, now: u64) -> Result<()> {
        require!(self.has_root(), DropsError::RootNotSet);
        require!(now >= self.starts_at, DropsError::NotStarted);
        require!(now <= self.expires_at, DropsError::Expired);
        Ok(())
    }

    /// Adds a claim to the running total, returns the new total
    pub fn record_claim(&mut self, amount: u64) -> Result<u64> {
        let claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(DropsError::ArithmeticOverflow)?;
        require!(
            claimed_amount <= self.total_amount,
            DropsError::Oversubscribed
        );

        self.claimed_amount = claimed_amount;
        Ok(claimed_amount)
    }

    /// Closes the drop's books after expiry.
    ///
    /// Returns the unclaimed remainder and marks it as paid out, so a second
    /// recovery fails with `FullyClaimed`.
    pub fn recover(&mut self, now: u64) -> Result<u64> {
        require!(now > self.expires_at, DropsError::NotExpired);
        require!(
            self.claimed_amount < self.total_amount,
            DropsError::FullyClaimed
        );

        let remainder = self.total_amount - self.claimed_amount;
        self.claimed_amount = self.total_amount;
        Ok(remainder)
    }
}
