//! Shared constants, errors and math for the discount hook ecosystem.
//!
//! # Modules
//!
//! * `constants` - Constants and PDA seeds used by the hook and the fund ledger.
//! * `errors` - Errors for both programs.
//! * `utils` - Utility functions (basis points math, remaining account parsing).
pub mod constants;
pub mod errors;
pub mod utils;
