use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Per-account permissions that lift transfer restrictions while the token
/// is frozen. They have no effect while the token is not frozen, and never
/// override the denylist.
#[cw_serde]
#[derive(Default, Copy, Eq)]
pub struct WhitelistFlags {
    /// May send while frozen, if the receiver has `allow_deposit`.
    pub allow_transfer: bool,
    /// May receive while frozen, if the sender has `allow_transfer`.
    pub allow_deposit: bool,
    /// May receive while frozen regardless of the sender's flags.
    pub allow_unconditional_deposit: bool,
    /// May send while frozen regardless of the receiver's flags.
    pub allow_unconditional_transfer: bool,
}

impl WhitelistFlags {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Whether or not token transfers are frozen
pub const IS_FROZEN: Item<bool> = Item::new("is_frozen");

/// Denylist addresses prevented from sending or receiving tokens
pub const DENYLIST: Map<&Addr, bool> = Map::new("denylist");

/// Whitelist flags by address. Accounts with every flag cleared are not
/// stored.
pub const WHITELIST: Map<&Addr, WhitelistFlags> = Map::new("whitelist");

// Balances, token info and allowances use the cw20-base storage layout, see
// `cw20_base::state`.
