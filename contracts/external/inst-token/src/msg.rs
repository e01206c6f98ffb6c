use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::cw_ownable_execute;
use cw_utils::Expiration;

use crate::state::WhitelistFlags;

/// Deploys a token. The whole supply is credited to the instantiating
/// address, which also becomes the contract owner. The token starts
/// unfrozen with an empty denylist and whitelist.
#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Fixed for the life of the contract, there is no mint or burn.
    pub total_supply: Uint128,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Move `amount` tokens from the sender to `recipient`, subject to the
    /// transfer policy.
    Transfer { recipient: String, amount: Uint128 },

    /// Send `amount` tokens to every address in `recipients`. Each leg is
    /// checked against the transfer policy and the sender must hold
    /// `amount * recipients.len()`. Either every leg is applied or none is.
    MultiTransfer {
        recipients: Vec<String>,
        amount: Uint128,
    },

    /// Move tokens out of `owner`'s account using an allowance previously
    /// granted to the sender. The transfer policy is applied to the `owner`
    /// -> `recipient` leg.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    /// Allow `spender` to move up to `amount` more of the sender's tokens.
    IncreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Lower the amount `spender` may move out of the sender's account.
    DecreaseAllowance {
        spender: String,
        amount: Uint128,
        expires: Option<Expiration>,
    },

    /// Restrict transfers to whitelisted accounts. Owner only.
    Freeze {},

    /// Lift the freeze. Owner only.
    Unfreeze {},

    /// Add every address to the denylist. Owner only. Fails without effect if
    /// any address is the zero address.
    AddToDenylist { addresses: Vec<String> },

    /// Remove every address from the denylist. Owner only. Fails without
    /// effect if any address is the zero address.
    RemoveFromDenylist { addresses: Vec<String> },

    /// Overwrite the whitelist flags of every address with the given values.
    /// Owner only.
    Whitelist {
        addresses: Vec<String>,
        allow_transfer: bool,
        allow_deposit: bool,
        allow_unconditional_deposit: bool,
        allow_unconditional_transfer: bool,
    },
}

/// Used for smart contract migration.
#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the fixed token supply.
    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    /// Returns the balance of an address, zero if it never held tokens.
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Returns token metadata and supply.
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    /// Returns whether transfers are currently frozen.
    #[returns(IsFrozenResponse)]
    IsFrozen {},

    /// Returns whether an address is on the denylist.
    #[returns(StatusResponse)]
    IsDenylisted { address: String },

    /// Enumerates addresses on the denylist.
    #[returns(DenylistResponse)]
    Denylist {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the whitelist flags of an address, all false if never set.
    #[returns(WhitelistFlags)]
    Whitelisted { address: String },

    /// Enumerates addresses with at least one whitelist flag set.
    #[returns(WhitelistResponse)]
    Whitelist {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns how much `spender` may still move out of `owner`'s account.
    #[returns(cw20::AllowanceResponse)]
    Allowance { owner: String, spender: String },

    /// Enumerates every address that has held tokens.
    #[returns(cw20::AllAccountsResponse)]
    AllAccounts {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct IsFrozenResponse {
    pub is_frozen: bool,
}

/// Whether a particular account is denylisted
#[cw_serde]
pub struct StatusResponse {
    pub status: bool,
}

#[cw_serde]
pub struct StatusInfo {
    pub address: String,
    pub status: bool,
}

#[cw_serde]
pub struct DenylistResponse {
    pub denylist: Vec<StatusInfo>,
}

#[cw_serde]
pub struct WhitelistInfo {
    pub address: String,
    pub flags: WhitelistFlags,
}

#[cw_serde]
pub struct WhitelistResponse {
    pub whitelist: Vec<WhitelistInfo>,
}
