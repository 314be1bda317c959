pub mod clock;
pub mod merkle;
pub mod token;

pub use clock::*;
pub use merkle::*;
pub use token::*;
