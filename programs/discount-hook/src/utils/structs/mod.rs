//! Structs for the discount hook program. Often used within an account.
pub mod auction_config;
pub mod auction_end_reason;
pub mod auction_state;
pub mod discount_mode;
pub mod encrypted_params;
pub mod finalize_outcome;
pub mod roles;
pub mod swap;

pub use auction_config::*;
pub use auction_end_reason::*;
pub use auction_state::*;
pub use discount_mode::*;
pub use encrypted_params::*;
pub use finalize_outcome::*;
pub use roles::*;
pub use swap::*;
