use anchor_lang::prelude::*;
use shared::errors::ErrorCode;

/// Move the finalizer reward out of a program-owned account.
///
/// The caller checks the account stays rent exempt (`HookConfig::can_pay_finalizer_reward`).
///
/// # Arguments
/// * `from` - The account paying, owned by the hook.
/// * `to` - The finalizer.
/// * `amount` - The reward in lamports.
#[cfg(not(tarpaulin_include))]
pub fn pay_finalizer_reward(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}
