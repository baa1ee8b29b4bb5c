//! Incoming transfer handler (mint path).

use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};

use common::bytes32_to_hex;
use token::msg::ExecuteMsg as TokenExecuteMsg;

use crate::error::ContractError;
use crate::intent::authorize;
use crate::state::{CONFIG, NONCES};

/// Mint `amount` to `account` on the token contract and consume the nonce the
/// signature covered.
///
/// The nonce write and the mint sub-message commit together: if the token
/// contract rejects the mint, the nonce is rolled back with it.
pub fn execute_receive_tokens(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
    signature: Binary,
) -> Result<Response, ContractError> {
    let intent = authorize(deps.as_ref(), &account, amount, &signature)?;
    let config = CONFIG.load(deps.storage)?;

    let next_nonce = intent
        .nonce
        .checked_add(1)
        .ok_or_else(|| ContractError::NonceOverflow {
            account: intent.account.clone(),
        })?;
    NONCES.save(deps.storage, &intent.account, &next_nonce)?;

    let mint_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::BridgeMint {
            account: intent.account.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "receive_tokens")
        .add_attribute("account", intent.account)
        .add_attribute("amount", amount)
        .add_attribute("nonce", intent.nonce.to_string())
        .add_attribute("next_nonce", next_nonce.to_string())
        .add_attribute("message_hash", bytes32_to_hex(&intent.message_hash))
        .add_attribute("relayer", info.sender))
}
