pub mod test_claim;

use anchor_lang::prelude::*;
use crate::error::DropsError;

/// Asserts that `result` failed with exactly `expected`
pub fn assert_drops_error<T: std::fmt::Debug>(result: Result<T>, expected: DropsError) {
    let err = result.expect_err("expected the call to fail");
    assert_eq!(err, anchor_lang::error::Error::from(expected));
}
