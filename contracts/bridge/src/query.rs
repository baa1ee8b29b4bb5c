//! Query handlers for the token bridge contract.

use cosmwasm_std::{Binary, Deps, StdResult, Uint128};

use common::verify_signature;

use crate::intent::{current_nonce, message_hash, SCHEME};
use crate::msg::{ConfigResponse, MessageHashResponse, NonceResponse, VerifySignatureResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        token: config.token,
    })
}

pub fn query_current_nonce(deps: Deps, account: String) -> StdResult<NonceResponse> {
    let account = deps.api.addr_validate(&account)?;
    let nonce = current_nonce(deps.storage, &account)?;
    Ok(NonceResponse { account, nonce })
}

pub fn query_message_hash(
    deps: Deps,
    account: String,
    amount: Uint128,
) -> StdResult<MessageHashResponse> {
    let account = deps.api.addr_validate(&account)?;
    let (hash, nonce) = message_hash(deps.storage, &account, amount)?;
    Ok(MessageHashResponse {
        message_hash: Binary::from(hash.to_vec()),
        nonce,
    })
}

/// Stateless check; `signer` is not address-validated so that any input
/// answers `valid: false` rather than failing.
pub fn query_verify_signature(
    deps: Deps,
    signer: String,
    message_hash: Binary,
    signature: Binary,
) -> StdResult<VerifySignatureResponse> {
    let valid = verify_signature(
        &SCHEME,
        deps.api,
        &signer,
        message_hash.as_slice(),
        signature.as_slice(),
    );
    Ok(VerifySignatureResponse { valid })
}
