pub mod execute_trigger;
pub mod finalize_current_bucket;

pub use execute_trigger::*;
pub use finalize_current_bucket::*;
