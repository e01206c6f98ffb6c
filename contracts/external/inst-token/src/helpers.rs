use cosmwasm_std::{Addr, Api, Deps, StdResult, Storage, Uint128};
use cw20_base::state::BALANCES;

use crate::policy::{self, AccountStatus};
use crate::state::{DENYLIST, IS_FROZEN, WHITELIST};
use crate::ContractError;

/// Returns true for the null account: an empty address, or one made up only
/// of `0` digits with an optional `0x` prefix.
pub fn is_zero_address(address: &str) -> bool {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    digits.chars().all(|c| c == '0')
}

/// Validates an address that is about to hold or receive state, rejecting the
/// zero address before running the chain's own address validation.
pub fn validate_account(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if is_zero_address(address) {
        return Err(ContractError::ZeroAddress {});
    }
    Ok(api.addr_validate(address)?)
}

/// Validates every address in `addresses`, failing on the first bad one.
pub fn validate_accounts(api: &dyn Api, addresses: &[String]) -> Result<Vec<Addr>, ContractError> {
    addresses
        .iter()
        .map(|address| validate_account(api, address))
        .collect()
}

pub fn load_account_status(storage: &dyn Storage, address: &Addr) -> StdResult<AccountStatus> {
    Ok(AccountStatus {
        denylisted: DENYLIST.may_load(storage, address)?.unwrap_or(false),
        flags: WHITELIST.may_load(storage, address)?.unwrap_or_default(),
    })
}

/// Runs the transfer policy for one `from` -> `to` leg against the current
/// freeze state, denylist and whitelist.
pub fn check_transfer_allowed(deps: Deps, from: &Addr, to: &Addr) -> Result<(), ContractError> {
    let is_frozen = IS_FROZEN.load(deps.storage)?;
    let sender = load_account_status(deps.storage, from)?;
    let receiver = load_account_status(deps.storage, to)?;

    policy::check_transfer(is_frozen, &sender, &receiver)?;
    Ok(())
}

pub fn check_has_funds(
    storage: &dyn Storage,
    owner: &Addr,
    required: Uint128,
) -> Result<(), ContractError> {
    let balance = BALANCES.may_load(storage, owner)?.unwrap_or_default();
    if balance < required {
        return Err(ContractError::InsufficientFunds { balance, required });
    }
    Ok(())
}

/// Debits `from` and credits `to`. Callers check funds first so a failure
/// here never leaves a half-applied transfer behind.
pub fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> StdResult<()> {
    BALANCES.update(storage, from, |balance: Option<Uint128>| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_sub(amount)?)
    })?;
    BALANCES.update(storage, to, |balance: Option<Uint128>| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;
    Ok(())
}
