pub mod config_state;
pub mod drop_state;
pub mod claim_state;
pub mod delegation_state;

pub use config_state::*;
pub use drop_state::*;
pub use claim_state::*;
pub use delegation_state::*;
