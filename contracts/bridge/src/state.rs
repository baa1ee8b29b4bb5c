//! State definitions for the token bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Token contract this bridge mints and burns on
    pub token: Addr,
}

pub const CONTRACT_NAME: &str = "crates.io:token-bridge";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");

/// account => next nonce to be consumed by `ReceiveTokens` (absent = zero)
pub const NONCES: Map<&Addr, u64> = Map::new("nonces");
