use anchor_lang::prelude::*;

#[error_code]
pub enum DropsError {
    // Access control errors
    #[msg("Caller is not authorized for this action")]
    Unauthorized,

    // Input validation errors
    #[msg("Invalid input")]
    InvalidInput,
    #[msg("Vault balance does not cover the drop total")]
    InsufficientFunding,

    // Claim window errors
    #[msg("Merkle root not set")]
    RootNotSet,
    #[msg("Drop has not started")]
    NotStarted,
    #[msg("Drop has expired")]
    Expired,

    // Claim ledger errors
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Claim would exceed the drop total")]
    Oversubscribed,

    // Recovery errors
    #[msg("Drop has not expired")]
    NotExpired,
    #[msg("Drop is fully claimed")]
    FullyClaimed,

    // Token errors
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Token mint does not match the drop's token mint")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Cluster clock returned a negative timestamp")]
    InvalidTimestamp,
}
