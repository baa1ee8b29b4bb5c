//! Message types for the token bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Token contract this bridge is allowed to mint and burn on
    pub token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn `amount` from `account` on this side.
    ///
    /// `signature` must be the account holder's signature over
    /// `MessageHash { account, amount }` at the current nonce. The nonce is
    /// not consumed.
    ///
    /// Authorization: anyone holding a valid signature
    SendTokens {
        account: String,
        amount: Uint128,
        signature: Binary,
    },

    /// Mint `amount` to `account` on this side and consume the account's
    /// current nonce.
    ///
    /// Authorization: anyone holding a valid signature
    ReceiveTokens {
        account: String,
        amount: Uint128,
        signature: Binary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Nonce the next signature for `account` must cover
    #[returns(NonceResponse)]
    CurrentNonce { account: String },

    /// Digest the holder signs for `(account, amount)` at the current nonce
    #[returns(MessageHashResponse)]
    MessageHash { account: String, amount: Uint128 },

    /// Whether `signature` over `message_hash` recovers to `signer`.
    /// Malformed input yields `valid: false`, never an error.
    #[returns(VerifySignatureResponse)]
    VerifySignature {
        signer: String,
        message_hash: Binary,
        signature: Binary,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct NonceResponse {
    pub account: Addr,
    pub nonce: u64,
}

#[cw_serde]
pub struct MessageHashResponse {
    pub message_hash: Binary,
    /// Nonce embedded in `message_hash`
    pub nonce: u64,
}

#[cw_serde]
pub struct VerifySignatureResponse {
    pub valid: bool,
}
