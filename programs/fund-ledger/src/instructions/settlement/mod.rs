pub mod collect_penalty;
pub mod pay_bonus;

pub use collect_penalty::*;
pub use pay_bonus::*;
