//! Transfer intent authorization
//!
//! An intent `(account, amount)` is authorized when the supplied signature
//! recovers to `account` over the message hash taken at the account's current
//! nonce. Reading the nonce and checking the signature happen here; consuming
//! the nonce is left to the mint path.

use cosmwasm_std::{Addr, Deps, StdResult, Storage, Uint128};

use common::{compute_message_hash, verify_signature, Secp256k1Keccak};

use crate::error::ContractError;
use crate::state::NONCES;

/// Signature scheme accepted by this bridge
pub const SCHEME: Secp256k1Keccak = Secp256k1Keccak;

/// An intent whose signature has been checked
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorizedIntent {
    pub account: Addr,
    pub amount: Uint128,
    /// Nonce the signature covered
    pub nonce: u64,
    pub message_hash: [u8; 32],
}

pub fn current_nonce(storage: &dyn Storage, account: &Addr) -> StdResult<u64> {
    Ok(NONCES.may_load(storage, account)?.unwrap_or_default())
}

/// Message hash for `(account, amount)` at the account's current nonce,
/// returned together with that nonce.
pub fn message_hash(
    storage: &dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> StdResult<([u8; 32], u64)> {
    let nonce = current_nonce(storage, account)?;
    let hash = compute_message_hash(account.as_str(), amount.u128(), nonce);
    Ok((hash, nonce))
}

/// Validate `account` and check `signature` against its current message hash.
pub fn authorize(
    deps: Deps,
    account: &str,
    amount: Uint128,
    signature: &[u8],
) -> Result<AuthorizedIntent, ContractError> {
    let account = deps.api.addr_validate(account)?;
    let (message_hash, nonce) = message_hash(deps.storage, &account, amount)?;

    if !verify_signature(&SCHEME, deps.api, account.as_str(), &message_hash, signature) {
        return Err(ContractError::InvalidSignature);
    }

    Ok(AuthorizedIntent {
        account,
        amount,
        nonce,
        message_hash,
    })
}
