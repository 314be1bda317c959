use anchor_lang::prelude::*;

/// Event emitted when a new drop is created
#[event]
pub struct DropCreated {
    /// Sequential id of the drop
    pub drop_id: u64,
    /// Token mint distributed by the drop
    pub token: Pubkey,
    /// Start of the claim window (unix seconds)
    pub starts_at: u64,
    /// End of the claim window (unix seconds, inclusive)
    pub expires_at: u64,
    /// Total amount distributable by the drop
    pub total_amount: u64,
}

/// Event emitted when a drop's merkle root is set or rotated
#[event]
pub struct MerkleRootSet {
    pub drop_id: u64,
    pub merkle_root: [u8; 32],
}

/// Event emitted when a drop's description changes
#[event]
pub struct DescriptionSet {
    pub drop_id: u64,
    pub description: String,
}

/// Event emitted when an allocation is claimed
#[event]
pub struct Claimed {
    pub drop_id: u64,
    /// Account the allocation belongs to
    pub account: Pubkey,
    /// Owner of the token account that received the tokens
    pub recipient: Pubkey,
    pub amount: u64,
}

impl Claimed {
    /// `recipient_owner` is the owner of the receiving token account, which
    /// differs from `account` when a delegate routes the tokens elsewhere
    pub fn new(drop_id: u64, account: Pubkey, recipient_owner: Pubkey, amount: u64) -> Self {
        Self {
            drop_id,
            account,
            recipient: recipient_owner,
            amount,
        }
    }
}

/// Event emitted when the unclaimed remainder of an expired drop is recovered
#[event]
pub struct ExpiredTokensRecovered {
    pub drop_id: u64,
    pub token: Pubkey,
    pub amount: u64,
}

/// Event emitted when an account names (or clears) its claiming delegate
#[event]
pub struct DelegateSet {
    pub account: Pubkey,
    /// `Pubkey::default()` when the delegate was cleared
    pub delegate: Pubkey,
}

/// Event emitted when the owner nominates a successor
#[event]
pub struct OwnershipTransferStarted {
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
}

/// Event emitted when the nominated successor accepts ownership
#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
