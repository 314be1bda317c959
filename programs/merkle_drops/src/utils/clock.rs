use anchor_lang::prelude::*;
use crate::error::*;

/// Current cluster time as unsigned unix seconds
pub fn now() -> Result<u64> {
    let unix_timestamp = Clock::get()?.unix_timestamp;
    u64::try_from(unix_timestamp).map_err(|_| error!(DropsError::InvalidTimestamp))
}
