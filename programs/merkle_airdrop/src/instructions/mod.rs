pub mod create_airdrop;
pub mod claim;
pub mod withdraw;

pub use create_airdrop::*;
pub use claim::*;
pub use withdraw::*;
