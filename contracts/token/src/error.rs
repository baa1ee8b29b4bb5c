use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the bridge address can mint or burn")]
    UnauthorizedBridge,

    #[error("Insufficient balance: balance {balance}, required {required}")]
    InsufficientBalance { balance: Uint128, required: Uint128 },

    #[error("Overflow: mint would exceed the maximum supply")]
    Overflow,
}
