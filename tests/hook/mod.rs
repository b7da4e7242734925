pub mod test_bucketed_schedule;
pub mod test_hook_config;
pub mod test_settlement;
