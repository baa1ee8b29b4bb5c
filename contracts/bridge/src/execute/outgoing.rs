//! Outgoing transfer handler (burn path).

use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};

use common::bytes32_to_hex;
use token::msg::ExecuteMsg as TokenExecuteMsg;

use crate::error::ContractError;
use crate::intent::authorize;
use crate::state::CONFIG;

/// Burn `amount` from `account` on the token contract.
///
/// The signature must cover the account's current nonce, which is left
/// unchanged. A replayed call is bounded only by the holder's balance: once
/// it runs out the token contract rejects the burn.
pub fn execute_send_tokens(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
    signature: Binary,
) -> Result<Response, ContractError> {
    let intent = authorize(deps.as_ref(), &account, amount, &signature)?;
    let config = CONFIG.load(deps.storage)?;

    let burn_msg = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::BridgeBurn {
            account: intent.account.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("action", "send_tokens")
        .add_attribute("account", intent.account)
        .add_attribute("amount", amount)
        .add_attribute("nonce", intent.nonce.to_string())
        .add_attribute("message_hash", bytes32_to_hex(&intent.message_hash))
        .add_attribute("relayer", info.sender))
}
