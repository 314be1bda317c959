use anchor_lang::prelude::Pubkey;
use super::assert_drops_error;
use super::test_drop_state::{open_drop, START};
use super::test_merkle::{allocations, Allocation, AllocationTree};
use crate::error::DropsError;
use crate::event::Claimed;
use crate::instructions::{apply_claim, ClaimArgs};
use crate::state::*;

struct Fixture {
    owner: Pubkey,
    allocs: Vec<Allocation>,
    tree: AllocationTree,
    token_drop: TokenDrop,
}

impl Fixture {
    /// Drop of 1000 over 100 seconds with allocations of 400, 350 and 250
    fn new() -> Self {
        let allocs = allocations(&[400, 350, 250]);
        let tree = AllocationTree::new(&allocs);
        let token_drop = open_drop(1000, 100, tree.root());
        Fixture {
            owner: Pubkey::new_unique(),
            allocs,
            tree,
            token_drop,
        }
    }

    fn claim(
        &mut self,
        record: &mut ClaimRecord,
        position: usize,
        caller: &Pubkey,
        delegate: Option<&Pubkey>,
        now: u64,
    ) -> anchor_lang::Result<u64> {
        let alloc = self.allocs[position].clone();
        let proof = self.tree.proof(position);
        apply_claim(
            &mut self.token_drop,
            record,
            caller,
            &self.owner,
            delegate,
            now,
            &ClaimArgs {
                account: alloc.account,
                amount: alloc.amount,
                proof: &proof,
                index: alloc.index,
            },
        )
    }
}

#[test]
fn test_claim_lifecycle() {
    let mut fx = Fixture::new();
    let account = fx.allocs[0].account;
    let mut record = ClaimRecord::default();

    assert_drops_error(
        fx.claim(&mut record, 0, &account, None, START - 1),
        DropsError::NotStarted,
    );

    assert_eq!(fx.claim(&mut record, 0, &account, None, START).unwrap(), 400);
    assert_eq!(fx.token_drop.claimed_amount, 400);
    assert!(record.claimed);
    assert_eq!(record.amount, 400);

    assert_drops_error(
        fx.claim(&mut record, 0, &account, None, START + 1),
        DropsError::AlreadyClaimed,
    );
    assert_eq!(fx.token_drop.claimed_amount, 400);

    assert_eq!(fx.token_drop.recover(START + 101).unwrap(), 600);
    assert_eq!(fx.token_drop.claimed_amount, 1000);
    assert_drops_error(fx.token_drop.recover(START + 102), DropsError::FullyClaimed);
}

#[test]
fn test_claim_at_window_end_and_after() {
    let mut fx = Fixture::new();
    let first = fx.allocs[0].account;
    let second = fx.allocs[1].account;

    let mut record = ClaimRecord::default();
    assert!(fx.claim(&mut record, 0, &first, None, START + 100).is_ok());

    let mut record = ClaimRecord::default();
    assert_drops_error(
        fx.claim(&mut record, 1, &second, None, START + 101),
        DropsError::Expired,
    );
    assert!(!record.claimed);
}

#[test]
fn test_delegate_claims_for_account() {
    let mut fx = Fixture::new();
    let delegate = Pubkey::new_unique();
    let mut record = ClaimRecord::default();

    assert_eq!(
        fx.claim(&mut record, 0, &delegate, Some(&delegate), START + 10).unwrap(),
        400
    );
    assert!(record.claimed);
}

#[test]
fn test_delegate_claim_event_names_account_and_recipient() {
    let mut fx = Fixture::new();
    let account = fx.allocs[1].account;
    let delegate = Pubkey::new_unique();
    let mut record = ClaimRecord::default();

    fx.claim(&mut record, 1, &delegate, Some(&delegate), START).unwrap();

    // The delegate routes the tokens to its own token account
    let event = Claimed::new(fx.token_drop.id, account, delegate, record.amount);
    assert_eq!(event.account, account);
    assert_eq!(event.recipient, delegate);
    assert_eq!(event.amount, 350);
    assert_eq!(event.drop_id, 0);
}

#[test]
fn test_unauthorized_checked_first() {
    let mut fx = Fixture::new();
    let stranger = Pubkey::new_unique();
    fx.token_drop.merkle_root = [0; 32];
    let mut record = ClaimRecord::default();

    assert_drops_error(
        fx.claim(&mut record, 0, &stranger, None, START - 1),
        DropsError::Unauthorized,
    );
}

#[test]
fn test_unset_root_blocks_claims() {
    let mut fx = Fixture::new();
    let account = fx.allocs[0].account;
    fx.token_drop.merkle_root = [0; 32];
    let mut record = ClaimRecord::default();

    assert_drops_error(
        fx.claim(&mut record, 0, &account, None, START),
        DropsError::RootNotSet,
    );
}

#[test]
fn test_already_claimed_regardless_of_proof() {
    let mut fx = Fixture::new();
    let account = fx.allocs[0].account;
    let mut record = ClaimRecord::default();
    fx.claim(&mut record, 0, &account, None, START).unwrap();

    let bogus = [[9u8; 32]];
    let result = apply_claim(
        &mut fx.token_drop,
        &mut record,
        &account,
        &fx.owner,
        None,
        START,
        &ClaimArgs {
            account,
            amount: 1,
            proof: &bogus,
            index: 7,
        },
    );
    assert_drops_error(result, DropsError::AlreadyClaimed);
}

#[test]
fn test_inflated_amount_rejected() {
    let mut fx = Fixture::new();
    let alloc = fx.allocs[0].clone();
    let proof = fx.tree.proof(0);
    let mut record = ClaimRecord::default();

    let result = apply_claim(
        &mut fx.token_drop,
        &mut record,
        &alloc.account,
        &fx.owner,
        None,
        START,
        &ClaimArgs {
            account: alloc.account,
            amount: 1000,
            proof: &proof,
            index: alloc.index,
        },
    );
    assert_drops_error(result, DropsError::InvalidProof);
    assert!(!record.claimed);
    assert_eq!(fx.token_drop.claimed_amount, 0);
}

#[test]
fn test_root_rotation_keeps_prior_claims() {
    let mut fx = Fixture::new();
    let first = fx.allocs[0].account;
    let second = fx.allocs[1].account;

    let mut first_record = ClaimRecord::default();
    fx.claim(&mut first_record, 0, &first, None, START).unwrap();

    // rotate to a tree the old proofs do not belong to
    let rotated = AllocationTree::new(&allocations(&[100, 200]));
    fx.token_drop.merkle_root = rotated.root();

    assert!(first_record.claimed);
    assert_eq!(first_record.amount, 400);
    assert_eq!(fx.token_drop.claimed_amount, 400);

    let mut second_record = ClaimRecord::default();
    assert_drops_error(
        fx.claim(&mut second_record, 1, &second, None, START + 1),
        DropsError::InvalidProof,
    );
    assert_drops_error(
        fx.claim(&mut first_record, 0, &first, None, START + 1),
        DropsError::AlreadyClaimed,
    );
}

#[test]
fn test_oversubscribed_tree_capped_at_total() {
    let allocs = allocations(&[700, 700]);
    let tree = AllocationTree::new(&allocs);
    let mut fx = Fixture {
        owner: Pubkey::new_unique(),
        allocs,
        token_drop: open_drop(1000, 100, tree.root()),
        tree,
    };
    let first = fx.allocs[0].account;
    let second = fx.allocs[1].account;

    let mut record = ClaimRecord::default();
    assert_eq!(fx.claim(&mut record, 0, &first, None, START).unwrap(), 700);

    let mut record = ClaimRecord::default();
    assert_drops_error(
        fx.claim(&mut record, 1, &second, None, START),
        DropsError::Oversubscribed,
    );
    assert!(!record.claimed);
    assert_eq!(fx.token_drop.claimed_amount, 700);
}

#[test]
fn test_all_allocations_claimed_leaves_nothing_to_recover() {
    let mut fx = Fixture::new();
    for position in 0..fx.allocs.len() {
        let account = fx.allocs[position].account;
        let mut record = ClaimRecord::default();
        fx.claim(&mut record, position, &account, None, START + 50).unwrap();
    }

    assert_eq!(fx.token_drop.claimed_amount, 1000);
    assert_drops_error(fx.token_drop.recover(START + 101), DropsError::FullyClaimed);
}
