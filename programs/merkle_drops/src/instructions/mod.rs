pub mod initialize;
pub mod init_vault;
pub mod create_drop;
pub mod set_merkle_root;
pub mod set_description;
pub mod claim;
pub mod set_delegate;
pub mod recover_expired;
pub mod transfer_ownership;

pub use initialize::*;
pub use init_vault::*;
pub use create_drop::*;
pub use set_merkle_root::*;
pub use set_description::*;
pub use claim::*;
pub use set_delegate::*;
pub use recover_expired::*;
pub use transfer_ownership::*;
