pub const HOOK_CONFIG_SEEDS: &[u8] = b"hook_config";
pub const HOOK_SIGNER_SEEDS: &[u8] = b"hook_signer";
pub const VENUE_SEEDS: &[u8] = b"venue";
pub const EVALUATION_QUEUE_SEEDS: &[u8] = b"evaluation_queue";

pub const LEDGER_CONFIG_SEEDS: &[u8] = b"ledger_config";
pub const RESERVE_SEEDS: &[u8] = b"reserve";
