#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use cw20::Cw20Coin;
use cw20_base::msg::InstantiateMsg as Cw20InstantiateMsg;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::queries;
use crate::state::{WhitelistFlags, IS_FROZEN};

// Version info for migration
pub(crate) const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // The deployer receives the entire supply.
    let initial_balances = if msg.total_supply.is_zero() {
        vec![]
    } else {
        vec![Cw20Coin {
            address: info.sender.to_string(),
            amount: msg.total_supply,
        }]
    };

    // cw20-base validates the token metadata and records balances and
    // supply. No minter is set, so the supply can never change.
    cw20_base::contract::instantiate(
        deps.branch(),
        env,
        info.clone(),
        Cw20InstantiateMsg {
            name: msg.name,
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            initial_balances,
            mint: None,
            marketing: None,
        },
    )?;

    // cw20-base::contract::instantiate sets the contract version, so overwrite
    // it here.
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // Owner is the sender of the initial InstantiateMsg
    cw_ownable::initialize_owner(deps.storage, deps.api, Some(info.sender.as_str()))?;

    IS_FROZEN.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("total_supply", msg.total_supply))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Token transfers
        ExecuteMsg::Transfer { recipient, amount } => {
            execute::transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::MultiTransfer { recipients, amount } => {
            execute::multi_transfer(deps, info, recipients, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute::transfer_from(deps, env, info, owner, recipient, amount),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => execute::increase_allowance(deps, env, info, spender, amount, expires),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => execute::decrease_allowance(deps, env, info, spender, amount, expires),

        // Owner functions
        ExecuteMsg::Freeze {} => execute::set_frozen(deps, info, true),
        ExecuteMsg::Unfreeze {} => execute::set_frozen(deps, info, false),
        ExecuteMsg::AddToDenylist { addresses } => {
            execute::update_denylist(deps, info, addresses, true)
        }
        ExecuteMsg::RemoveFromDenylist { addresses } => {
            execute::update_denylist(deps, info, addresses, false)
        }
        ExecuteMsg::Whitelist {
            addresses,
            allow_transfer,
            allow_deposit,
            allow_unconditional_deposit,
            allow_unconditional_transfer,
        } => execute::whitelist(
            deps,
            info,
            addresses,
            WhitelistFlags {
                allow_transfer,
                allow_deposit,
                allow_unconditional_deposit,
                allow_unconditional_transfer,
            },
        ),
        ExecuteMsg::UpdateOwnership(action) => {
            execute::update_ownership(deps, env, info, action)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TotalSupply {} => to_json_binary(&queries::query_total_supply(deps)?),
        QueryMsg::Balance { address } => {
            to_json_binary(&cw20_base::contract::query_balance(deps, address)?)
        }
        QueryMsg::TokenInfo {} => to_json_binary(&cw20_base::contract::query_token_info(deps)?),
        QueryMsg::IsFrozen {} => to_json_binary(&queries::query_is_frozen(deps)?),
        QueryMsg::IsDenylisted { address } => {
            to_json_binary(&queries::query_is_denylisted(deps, address)?)
        }
        QueryMsg::Denylist { start_after, limit } => {
            to_json_binary(&queries::query_denylist(deps, start_after, limit)?)
        }
        QueryMsg::Whitelisted { address } => {
            to_json_binary(&queries::query_whitelisted(deps, address)?)
        }
        QueryMsg::Whitelist { start_after, limit } => {
            to_json_binary(&queries::query_whitelist(deps, start_after, limit)?)
        }
        QueryMsg::Allowance { owner, spender } => to_json_binary(
            &cw20_base::allowances::query_allowance(deps, owner, spender)?,
        ),
        QueryMsg::AllAccounts { start_after, limit } => to_json_binary(
            &cw20_base::enumerable::query_all_accounts(deps, start_after, limit)?,
        ),
        QueryMsg::Ownership {} => to_json_binary(&queries::query_owner(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let storage_version: ContractVersion = get_contract_version(deps.storage)?;

    // Only migrate if newer
    if storage_version.version.as_str() < CONTRACT_VERSION {
        // Set contract to version to latest
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::default())
}
