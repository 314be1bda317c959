use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak::hashv;

/// Leaf committed into the allocation tree for one `(account, index, amount)` entry.
///
/// `index` is the entry's position in the off-chain allocation list; both it
/// and `amount` must be exactly the values the tree was built from.
pub fn leaf_hash(account: &Pubkey, index: u64, amount: u64) -> [u8; 32] {
    hashv(&[
        account.as_ref(),
        &index.to_le_bytes(),
        &amount.to_le_bytes(),
    ])
    .to_bytes()
}

/// Hashes a node pair in ascending byte order, independent of tree position
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Verifies a merkle inclusion proof.
///
/// Folds `leaf` with each sibling of `proof` in order and compares the
/// result with `root`. Runs in time linear in the proof length; there is no
/// depth bound beyond the root mismatch.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |computed, sibling| hash_pair(&computed, sibling));
    computed == root
}
