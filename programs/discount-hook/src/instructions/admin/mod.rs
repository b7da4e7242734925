pub mod end_auction;
pub mod init_hook_config;
pub mod init_venue;
pub mod set_encrypted_params;
pub mod set_venue_config;
pub mod start_auction;
pub mod update_hook_config;

pub use end_auction::*;
pub use init_hook_config::*;
pub use init_venue::*;
pub use set_encrypted_params::*;
pub use set_venue_config::*;
pub use start_auction::*;
pub use update_hook_config::*;
