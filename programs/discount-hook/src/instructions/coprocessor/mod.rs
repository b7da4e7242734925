pub mod submit_evaluation;

pub use submit_evaluation::*;
