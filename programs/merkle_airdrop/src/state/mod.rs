pub mod airdrop_state;
pub mod claim_state;

pub use airdrop_state::*;
pub use claim_state::*;
