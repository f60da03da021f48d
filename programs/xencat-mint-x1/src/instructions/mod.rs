pub mod initialize;
pub mod mint_from_burn_v3;

pub use initialize::*;
pub use mint_from_burn_v3::*;
