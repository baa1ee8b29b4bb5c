//! Error types for the token bridge contract
//!
//! Token contract failures (unauthorized bridge, insufficient balance, supply
//! overflow) are not wrapped here: they surface unchanged as the root cause of
//! the failed transaction.

use cosmwasm_std::{Addr, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Invalid signature: does not recover to the account at its current nonce")]
    InvalidSignature,

    #[error("Nonce overflow for account {account}")]
    NonceOverflow { account: Addr },
}
