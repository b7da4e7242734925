pub mod after_swap;
pub mod before_swap;

pub use after_swap::*;
pub use before_swap::*;
