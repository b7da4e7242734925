pub mod evaluation_queue;
pub mod hook_config;
pub mod venue;
pub mod venue_buckets;
