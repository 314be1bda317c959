use anchor_lang::prelude::*;

declare_id!("D2o8TSAWYLq235zEbRHC7ytfCUDoe1AEhF6UMUNa6mfL");

pub mod authority;
pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Merkle Drops Program
 *
 * A Solana program for time-windowed token drops whose allocations are
 * committed to by a merkle root and claimed with inclusion proofs.
 *
 * Key Features:
 * - Many drops per program, numbered sequentially from 0
 * - Exactly one claim per (drop, account) pair
 * - Claims open between starts_at and expires_at (both inclusive)
 * - Claiming through a registered delegate, to any recipient token account
 * - Owner may rotate a drop's merkle root at any time
 * - Recovery of the unclaimed remainder once a drop expires
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Config PDA: owner, drop counter, token authority of the vaults
 * - Vault PDAs: one token account per mint, funded externally
 * - Drop PDAs: parameters and running totals of each drop
 * - Claim Record PDAs: one per (drop, account) pair, never closed
 * - Delegation PDAs: one per delegating account
 *
 * Workflow:
 * 1. Initialize config and the vault for the token
 * 2. Fund the vault, then owner creates a drop (optionally with its root)
 * 3. Owner sets or rotates the merkle root
 * 4. Accounts (or their delegates) claim with valid merkle proofs
 * 5. Owner recovers the unclaimed remainder after expiry
 */
#[program]
pub mod merkle_drops {
    use super::*;

    /**
     * Creates the program config
     *
     * @param owner - Administrator of all drops
     *
     * Access Control: The program's upgrade authority only
     */
    pub fn initialize(ctx: Context<Initialize>, owner: Pubkey) -> Result<()> {
        handle_initialize(ctx, owner)
    }

    /**
     * Creates the program-owned vault for a token mint
     *
     * Access Control: Permissionless
     */
    pub fn init_vault(ctx: Context<InitVault>) -> Result<()> {
        handle_init_vault(ctx)
    }

    /**
     * Creates a new drop
     *
     * Requires the mint's vault to already hold at least total_amount.
     *
     * @param description - Administrative label, at most 384 bytes
     * @param start_time - Unix timestamp the claim window opens, 0 for now
     * @param duration - Length of the claim window in seconds
     * @param total_amount - Total amount the drop distributes
     * @param merkle_root - Allocation root, all zeros to set it later
     * @returns The new drop id
     *
     * Access Control: Owner only
     */
    pub fn create_drop(
        ctx: Context<CreateDrop>,
        description: String,
        start_time: u64,
        duration: u64,
        total_amount: u64,
        merkle_root: [u8; 32],
    ) -> Result<u64> {
        handle_create_drop(ctx, description, start_time, duration, total_amount, merkle_root)
    }

    /**
     * Sets or rotates a drop's merkle root
     *
     * Access Control: Owner only
     * Note: Proofs built for a previous root stop verifying after rotation
     */
    pub fn set_merkle_root(
        ctx: Context<SetMerkleRoot>,
        drop_id: u64,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_set_merkle_root(ctx, drop_id, merkle_root)
    }

    /**
     * Replaces a drop's description
     *
     * Access Control: Owner only
     */
    pub fn set_description(
        ctx: Context<SetDescription>,
        drop_id: u64,
        description: String,
    ) -> Result<()> {
        handle_set_description(ctx, drop_id, description)
    }

    /**
     * Claims an allocation with merkle proof verification
     *
     * @param drop_id - Id of the drop
     * @param account - Account the allocation belongs to
     * @param amount - Allocated amount
     * @param proof - Array of 32-byte hashes forming the merkle proof
     * @param index - Position of the allocation in the allocation list
     *
     * Access Control: The account or its delegate
     */
    pub fn claim(
        ctx: Context<Claim>,
        drop_id: u64,
        account: Pubkey,
        amount: u64,
        proof: Vec<[u8; 32]>,
        index: u64,
    ) -> Result<()> {
        handle_claim(ctx, drop_id, account, amount, proof, index)
    }

    /**
     * Sets or clears the claiming delegate of an account
     *
     * Access Control: The account itself or the owner
     */
    pub fn set_delegate(ctx: Context<SetDelegate>, account: Pubkey, delegate: Pubkey) -> Result<()> {
        handle_set_delegate(ctx, account, delegate)
    }

    /**
     * Recovers the unclaimed remainder of an expired drop
     *
     * @returns The amount transferred back to the owner
     *
     * Access Control: Owner only
     */
    pub fn recover_expired(ctx: Context<RecoverExpired>, drop_id: u64) -> Result<u64> {
        handle_recover_expired(ctx, drop_id)
    }

    /**
     * Nominates a new owner, who must accept before taking over
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Completes a pending ownership transfer
     *
     * Access Control: Pending owner only
     */
    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        handle_accept_ownership(ctx)
    }
}
