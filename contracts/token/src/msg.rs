//! Message types for the bridged token contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The instantiating account becomes the owner.
#[cw_serde]
#[derive(Default)]
pub struct InstantiateMsg {
    /// Token name (default "Bridged Token")
    pub name: Option<String>,
    /// Token symbol (default "BRT")
    pub symbol: Option<String>,
    /// Token decimals (default 18)
    pub decimals: Option<u8>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint `amount` to `account`
    ///
    /// Authorization: bridge address only
    BridgeMint { account: String, amount: Uint128 },

    /// Burn `amount` from `account`
    ///
    /// Authorization: bridge address only
    BridgeBurn { account: String, amount: Uint128 },

    /// Set (or replace) the bridge address
    ///
    /// Authorization: owner only
    SetBridgeAddress { address: String },

    /// Move `amount` from the sender to `recipient`
    Transfer { recipient: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Balance of an account (zero if never credited)
    #[returns(cw20::BalanceResponse)]
    Balance { address: String },

    /// Name, symbol, decimals and total supply
    #[returns(cw20::TokenInfoResponse)]
    TokenInfo {},

    /// Currently configured bridge address
    #[returns(BridgeAddressResponse)]
    BridgeAddress {},

    #[returns(OwnerResponse)]
    Owner {},
}

#[cw_serde]
pub struct BridgeAddressResponse {
    pub bridge_address: Option<Addr>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}
