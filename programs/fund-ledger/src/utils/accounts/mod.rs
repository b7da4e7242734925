pub mod ledger_config;
pub mod reserve;

pub use ledger_config::*;
pub use reserve::*;
