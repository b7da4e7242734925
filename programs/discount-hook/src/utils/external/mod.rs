pub mod executor;
pub mod finalizer_reward;
pub mod fund_ledger_program;

pub use executor::*;
pub use finalizer_reward::*;
pub use fund_ledger_program::*;
