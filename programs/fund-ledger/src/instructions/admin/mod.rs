pub mod approve_spender;
pub mod emergency_withdraw;
pub mod init_ledger;
pub mod init_reserve;
pub mod update_ledger;

pub use approve_spender::*;
pub use emergency_withdraw::*;
pub use init_ledger::*;
pub use init_reserve::*;
pub use update_ledger::*;
