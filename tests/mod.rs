//! Test module for the discount hook program as well as the fund ledger program.
//! The unit tests only cover functions that don't require an Account<>, AccountLoader<> or AccountInfo<> as parameters,
//! to make it simpler when trying to mock data. The decisions of the instruction handlers live on the accounts
//! (`Venue::prepare_trade`, `Venue::settle_after_trade`, `FinalizeOutcome::rewards_finalizer`) and are tested there.
pub mod hook;
pub mod ledger;
