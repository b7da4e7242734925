pub mod test_ledger_config;
