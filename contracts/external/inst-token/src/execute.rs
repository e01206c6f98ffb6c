use cosmwasm_std::{attr, DepsMut, Env, MessageInfo, Response, StdError, Uint128};
use cw_utils::Expiration;

use crate::error::ContractError;
use crate::helpers::{
    check_has_funds, check_transfer_allowed, move_balance, validate_account, validate_accounts,
};
use crate::state::{WhitelistFlags, DENYLIST, IS_FROZEN, WHITELIST};

pub fn transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let rcpt_addr = validate_account(deps.api, &recipient)?;

    // All checks run before the first write.
    check_transfer_allowed(deps.as_ref(), &info.sender, &rcpt_addr)?;
    check_has_funds(deps.storage, &info.sender, amount)?;

    move_balance(deps.storage, &info.sender, &rcpt_addr, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", rcpt_addr)
        .add_attribute("amount", amount))
}

pub fn multi_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipients: Vec<String>,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if recipients.is_empty() {
        return Err(ContractError::NoRecipients {});
    }
    let rcpt_addrs = validate_accounts(deps.api, &recipients)?;

    // Every leg must pass the policy before any balance moves.
    for rcpt_addr in &rcpt_addrs {
        check_transfer_allowed(deps.as_ref(), &info.sender, rcpt_addr)?;
    }

    let total = amount
        .checked_mul(Uint128::from(rcpt_addrs.len() as u128))
        .map_err(StdError::from)?;
    check_has_funds(deps.storage, &info.sender, total)?;

    for rcpt_addr in &rcpt_addrs {
        move_balance(deps.storage, &info.sender, rcpt_addr, amount)?;
    }

    Ok(Response::new()
        .add_attribute("action", "multi_transfer")
        .add_attribute("from", info.sender)
        .add_attribute("recipients", rcpt_addrs.len().to_string())
        .add_attribute("amount", amount)
        .add_attribute("total", total))
}

pub fn transfer_from(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let rcpt_addr = validate_account(deps.api, &recipient)?;

    check_transfer_allowed(deps.as_ref(), &owner_addr, &rcpt_addr)?;
    check_has_funds(deps.storage, &owner_addr, amount)?;

    // Spend the allowance only once the transfer itself is known to succeed.
    cw20_base::allowances::deduct_allowance(
        deps.storage,
        &owner_addr,
        &info.sender,
        &env.block,
        amount,
    )?;
    move_balance(deps.storage, &owner_addr, &rcpt_addr, amount)?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "transfer_from"),
        attr("from", owner_addr),
        attr("to", rcpt_addr),
        attr("by", info.sender),
        attr("amount", amount),
    ]))
}

pub fn increase_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    Ok(cw20_base::allowances::execute_increase_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn decrease_allowance(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
    expires: Option<Expiration>,
) -> Result<Response, ContractError> {
    Ok(cw20_base::allowances::execute_decrease_allowance(
        deps, env, info, spender, amount, expires,
    )?)
}

pub fn set_frozen(
    deps: DepsMut,
    info: MessageInfo,
    status: bool,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    // NOTE: Does not check if new status is same as old status
    IS_FROZEN.save(deps.storage, &status)?;

    Ok(Response::new()
        .add_attribute("action", if status { "freeze" } else { "unfreeze" })
        .add_attribute("status", status.to_string()))
}

pub fn update_denylist(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
    status: bool,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    // A single invalid entry rejects the whole batch.
    let addrs = validate_accounts(deps.api, &addresses)?;

    // Entries are removed rather than stored as false to reduce space usage.
    for addr in &addrs {
        if status {
            DENYLIST.save(deps.storage, addr, &true)?;
        } else {
            DENYLIST.remove(deps.storage, addr);
        }
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if status {
                "add_to_denylist"
            } else {
                "remove_from_denylist"
            },
        )
        .add_attributes(addrs.into_iter().map(|addr| attr("address", addr))))
}

pub fn whitelist(
    deps: DepsMut,
    info: MessageInfo,
    addresses: Vec<String>,
    flags: WhitelistFlags,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let addrs = addresses
        .iter()
        .map(|address| deps.api.addr_validate(address))
        .collect::<Result<Vec<_>, _>>()?;

    for addr in &addrs {
        if flags.is_empty() {
            WHITELIST.remove(deps.storage, addr);
        } else {
            WHITELIST.save(deps.storage, addr, &flags)?;
        }
    }

    Ok(Response::new()
        .add_attribute("action", "whitelist")
        .add_attribute("allow_transfer", flags.allow_transfer.to_string())
        .add_attribute("allow_deposit", flags.allow_deposit.to_string())
        .add_attribute(
            "allow_unconditional_deposit",
            flags.allow_unconditional_deposit.to_string(),
        )
        .add_attribute(
            "allow_unconditional_transfer",
            flags.allow_unconditional_transfer.to_string(),
        )
        .add_attributes(addrs.into_iter().map(|addr| attr("address", addr))))
}

pub fn update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
    Ok(Response::default().add_attributes(ownership.into_attributes()))
}
