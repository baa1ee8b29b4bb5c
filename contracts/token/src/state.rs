use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:bridged-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_NAME: &str = "Bridged Token";
pub const DEFAULT_SYMBOL: &str = "BRT";
pub const DEFAULT_DECIMALS: u8 = 18;

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Fixed at instantiation
pub const OWNER: Item<Addr> = Item::new("owner");

/// The only caller allowed to mint or burn. `None` until the owner wires it.
pub const BRIDGE_ADDRESS: Item<Option<Addr>> = Item::new("bridge_address");

/// account => balance (absent = zero)
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
