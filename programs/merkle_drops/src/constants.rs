use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds and limits shared by every instruction of the drops program.
 */

/// ===== LIMIT CONSTANTS =====

/// Maximum byte length of a drop description
/// - Enforced at creation and on every later description update
/// - Must match the `max_len` of `TokenDrop::description`
pub const MAX_DESCRIPTION_LEN: usize = 384;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the program config PDA
/// - Used in: ["config"]
/// - Holds the owner and the drop counter
/// - Signs vault transfers as token authority
#[constant]
pub const CONFIG_SEED: &str = "config";

/// Seed for drop PDA derivation
/// - Used in: ["drop", drop_id (u64 LE)]
/// - Sequential ids keep every drop address deterministic
#[constant]
pub const DROP_SEED: &str = "drop";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", token_mint]
/// - One vault per mint, shared by all drops of that mint
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", drop_key, account_key]
/// - One record per (drop, account) pair, prevents double-claiming
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// Seed for delegation PDA derivation
/// - Used in: ["delegate", account_key]
#[constant]
pub const DELEGATE_SEED: &str = "delegate";
