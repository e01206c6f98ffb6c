use cosmwasm_std::{Addr, Deps, Order, StdResult};
use cw20_base::state::TOKEN_INFO;
use cw_storage_plus::{Bound, Map};
use cw_utils::maybe_addr;
use serde::{de::DeserializeOwned, Serialize};

use crate::msg::{
    DenylistResponse, IsFrozenResponse, StatusInfo, StatusResponse, TotalSupplyResponse,
    WhitelistInfo, WhitelistResponse,
};
use crate::state::{WhitelistFlags, DENYLIST, IS_FROZEN, WHITELIST};

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

pub fn query_total_supply(deps: Deps) -> StdResult<TotalSupplyResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TotalSupplyResponse {
        total_supply: info.total_supply,
    })
}

pub fn query_is_frozen(deps: Deps) -> StdResult<IsFrozenResponse> {
    let is_frozen = IS_FROZEN.load(deps.storage)?;
    Ok(IsFrozenResponse { is_frozen })
}

pub fn query_owner(deps: Deps) -> StdResult<cw_ownable::Ownership<Addr>> {
    cw_ownable::get_ownership(deps.storage)
}

pub fn query_is_denylisted(deps: Deps, address: String) -> StdResult<StatusResponse> {
    let status = DENYLIST
        .may_load(deps.storage, &deps.api.addr_validate(&address)?)?
        .unwrap_or(false);
    Ok(StatusResponse { status })
}

pub fn query_whitelisted(deps: Deps, address: String) -> StdResult<WhitelistFlags> {
    Ok(WHITELIST
        .may_load(deps.storage, &deps.api.addr_validate(&address)?)?
        .unwrap_or_default())
}

/// Pages through an address-keyed map in ascending address order.
fn range_map<T>(
    deps: Deps,
    map: Map<&Addr, T>,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<(Addr, T)>>
where
    T: Serialize + DeserializeOwned,
{
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_after = maybe_addr(deps.api, start_after)?;
    let start = start_after.as_ref().map(Bound::exclusive);

    map.range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}

pub fn query_denylist(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<DenylistResponse> {
    let denylist = range_map(deps, DENYLIST, start_after, limit)?
        .into_iter()
        .map(|(address, status)| StatusInfo {
            address: address.into_string(),
            status,
        })
        .collect();
    Ok(DenylistResponse { denylist })
}

pub fn query_whitelist(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<WhitelistResponse> {
    let whitelist = range_map(deps, WHITELIST, start_after, limit)?
        .into_iter()
        .map(|(address, flags)| WhitelistInfo {
            address: address.into_string(),
            flags,
        })
        .collect();
    Ok(WhitelistResponse { whitelist })
}
