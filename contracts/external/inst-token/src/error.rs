use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::policy::TransferDenial;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownership(#[from] cw_ownable::OwnershipError),

    #[error(transparent)]
    Cw20(#[from] cw20_base::ContractError),

    #[error("inst: {0}")]
    TransferDenied(#[from] TransferDenial),

    #[error("inst: the zero address is not a valid account")]
    ZeroAddress {},

    #[error("inst: transfer amount exceeds balance ({balance} available, {required} required)")]
    InsufficientFunds { balance: Uint128, required: Uint128 },

    #[error("inst: multi transfer requires at least one recipient")]
    NoRecipients {},
}
