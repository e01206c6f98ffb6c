//! The transfer policy, evaluated once per sender to receiver leg.
//!
//! Checks run in a fixed order and the first failing check decides the
//! outcome:
//!
//! 1. a denylisted sender is rejected,
//! 2. a denylisted receiver is rejected,
//! 3. an unfrozen token accepts the transfer,
//! 4. a frozen token accepts the transfer only if the sender has
//!    `allow_unconditional_transfer`, or the receiver has
//!    `allow_unconditional_deposit`, or the sender has `allow_transfer` and
//!    the receiver has `allow_deposit`.
//!
//! Whitelist flags can never lift a denylist rejection.

use thiserror::Error;

use crate::state::WhitelistFlags;

/// What the policy knows about one side of a transfer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountStatus {
    pub denylisted: bool,
    pub flags: WhitelistFlags,
}

/// Why a transfer leg was rejected.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferDenial {
    #[error("sender is denylisted")]
    SenderDenylisted,

    #[error("receiver is denylisted")]
    ReceiverDenylisted,

    #[error("token transfer while freezed and not whitelisted.")]
    FrozenNotWhitelisted,
}

pub fn check_transfer(
    is_frozen: bool,
    sender: &AccountStatus,
    receiver: &AccountStatus,
) -> Result<(), TransferDenial> {
    if sender.denylisted {
        return Err(TransferDenial::SenderDenylisted);
    }
    if receiver.denylisted {
        return Err(TransferDenial::ReceiverDenylisted);
    }
    if !is_frozen {
        return Ok(());
    }

    let whitelisted = sender.flags.allow_unconditional_transfer
        || receiver.flags.allow_unconditional_deposit
        || (sender.flags.allow_transfer && receiver.flags.allow_deposit);
    if whitelisted {
        Ok(())
    } else {
        Err(TransferDenial::FrozenNotWhitelisted)
    }
}
