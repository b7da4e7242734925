pub mod admin;
pub mod coprocessor;
pub mod crank;
pub mod engine;

pub use admin::*;
pub use coprocessor::*;
pub use crank::*;
pub use engine::*;
