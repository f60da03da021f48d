pub mod initialize_validator_set;
pub mod submit_burn_attestation_v3;

pub use initialize_validator_set::*;
pub use submit_burn_attestation_v3::*;
