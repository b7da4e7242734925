pub mod admin;
pub mod settlement;
pub mod user;

pub use admin::*;
pub use settlement::*;
pub use user::*;
