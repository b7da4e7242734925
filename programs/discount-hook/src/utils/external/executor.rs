use anchor_lang::{
    prelude::*,
    solana_program::{hash::hash, instruction::Instruction},
};
use shared::check_condition;
use shared::errors::ErrorCode;

use crate::ID as DISCOUNT_HOOK_PROGRAM_ID;

const EXECUTOR_PROGRAM_ID_INDEX: usize = 0;

/// Instruction called on the executor program once a cycle ended favorably.
pub const EXECUTE_BATCH_IX_NAME: &str = "global:execute_batch";

/// Anchor discriminator of the executor's `execute_batch` instruction.
pub fn execute_batch_discriminator() -> [u8; 8] {
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(EXECUTE_BATCH_IX_NAME.as_bytes()).to_bytes()[..8]);

    discriminator
}

/// Call the executor program registered in the hook config.
///
/// # Arguments
/// * `executor_program` - The registered executor program id.
/// * `remaining_accounts` - The executor program first, then the accounts it expects.
/// * `data` - The instruction data.
#[cfg(not(tarpaulin_include))]
pub fn call_executor(
    executor_program: &Pubkey,
    remaining_accounts: &[AccountInfo],
    data: Vec<u8>,
) -> Result<()> {
    check_condition!(
        remaining_accounts.len() > EXECUTOR_PROGRAM_ID_INDEX,
        MissingRemainingAccount
    );

    let program = &remaining_accounts[EXECUTOR_PROGRAM_ID_INDEX];

    check_condition!(
        program.key() == *executor_program && program.key() != DISCOUNT_HOOK_PROGRAM_ID,
        InvalidCallbackProgram
    );

    let executor_accounts = &remaining_accounts[EXECUTOR_PROGRAM_ID_INDEX + 1..];

    let mut account_metas: Vec<AccountMeta> = vec![];

    for account in executor_accounts {
        // No reentrancy into the hook.
        check_condition!(
            account.key() != DISCOUNT_HOOK_PROGRAM_ID,
            InvalidCallbackProgram
        );

        if account.is_writable {
            account_metas.push(AccountMeta::new(*account.key, account.is_signer));
        } else {
            account_metas.push(AccountMeta::new_readonly(*account.key, account.is_signer));
        }
    }

    anchor_lang::solana_program::program::invoke(
        &Instruction {
            program_id: program.key(),
            accounts: account_metas,
            data,
        },
        executor_accounts,
    )?;

    Ok(())
}
