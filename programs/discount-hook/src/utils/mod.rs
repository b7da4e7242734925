pub mod accounts;
pub mod evaluator;
pub mod external;
pub mod settlement;
pub mod structs;

pub use accounts::*;
pub use evaluator::*;
pub use external::*;
pub use settlement::*;
pub use structs::*;
