//! Bridged token entry points and handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::error::ContractError;
use crate::msg::{
    BridgeAddressResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, OwnerResponse, QueryMsg,
};
use crate::state::{
    TokenInfo, BALANCES, BRIDGE_ADDRESS, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_DECIMALS,
    DEFAULT_NAME, DEFAULT_SYMBOL, OWNER, TOKEN_INFO,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token_info = TokenInfo {
        name: msg.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
        symbol: msg.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
        decimals: msg.decimals.unwrap_or(DEFAULT_DECIMALS),
        total_supply: Uint128::zero(),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;
    OWNER.save(deps.storage, &info.sender)?;
    BRIDGE_ADDRESS.save(deps.storage, &None)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("name", token_info.name)
        .add_attribute("symbol", token_info.symbol))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BridgeMint { account, amount } => {
            execute_bridge_mint(deps, info, account, amount)
        }
        ExecuteMsg::BridgeBurn { account, amount } => {
            execute_bridge_burn(deps, info, account, amount)
        }
        ExecuteMsg::SetBridgeAddress { address } => {
            execute_set_bridge_address(deps, info, address)
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
    }
}

/// Only the configured bridge address may change supply.
fn assert_bridge(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    match BRIDGE_ADDRESS.load(deps.storage)? {
        Some(bridge) if bridge == *sender => Ok(()),
        _ => Err(ContractError::UnauthorizedBridge),
    }
}

/// Mint tokens to an account (bridge only).
pub fn execute_bridge_mint(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_bridge(deps.as_ref(), &info.sender)?;
    let account = deps.api.addr_validate(&account)?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    token_info.total_supply = token_info
        .total_supply
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;

    let balance = BALANCES
        .may_load(deps.storage, &account)?
        .unwrap_or_default()
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;

    TOKEN_INFO.save(deps.storage, &token_info)?;
    BALANCES.save(deps.storage, &account, &balance)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("account", account)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", token_info.total_supply))
}

/// Burn tokens from an account (bridge only).
pub fn execute_bridge_burn(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_bridge(deps.as_ref(), &info.sender)?;
    let account = deps.api.addr_validate(&account)?;

    let balance = BALANCES
        .may_load(deps.storage, &account)?
        .unwrap_or_default();
    let remaining = balance
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            balance,
            required: amount,
        })?;

    let mut token_info = TOKEN_INFO.load(deps.storage)?;
    // Supply is the sum of balances, so it always covers a single balance
    token_info.total_supply = token_info
        .total_supply
        .checked_sub(amount)
        .map_err(StdError::from)?;

    TOKEN_INFO.save(deps.storage, &token_info)?;
    BALANCES.save(deps.storage, &account, &remaining)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("account", account)
        .add_attribute("amount", amount)
        .add_attribute("total_supply", token_info.total_supply))
}

/// Replace the bridge address (owner only).
pub fn execute_set_bridge_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let owner = OWNER.load(deps.storage)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized);
    }

    let bridge = deps.api.addr_validate(&address)?;
    let previous = BRIDGE_ADDRESS.load(deps.storage)?;
    BRIDGE_ADDRESS.save(deps.storage, &Some(bridge.clone()))?;

    Ok(Response::new()
        .add_attribute("action", "set_bridge_address")
        .add_attribute(
            "previous",
            previous
                .map(|addr| addr.to_string())
                .unwrap_or_else(|| "none".to_string()),
        )
        .add_attribute("bridge_address", bridge))
}

/// Move tokens between accounts. Supply is unchanged.
pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;

    let sender_balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    let sender_remaining =
        sender_balance
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                balance: sender_balance,
                required: amount,
            })?;
    BALANCES.save(deps.storage, &info.sender, &sender_remaining)?;

    // Loaded after the debit so a self-transfer nets to zero
    let recipient_balance = BALANCES
        .may_load(deps.storage, &recipient)?
        .unwrap_or_default()
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;
    BALANCES.save(deps.storage, &recipient, &recipient_balance)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", amount))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::BridgeAddress {} => to_json_binary(&query_bridge_address(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
    }
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let address = deps.api.addr_validate(&address)?;
    let balance = BALANCES
        .may_load(deps.storage, &address)?
        .unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

pub fn query_bridge_address(deps: Deps) -> StdResult<BridgeAddressResponse> {
    let bridge_address = BRIDGE_ADDRESS.load(deps.storage)?;
    Ok(BridgeAddressResponse { bridge_address })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let owner = OWNER.load(deps.storage)?;
    Ok(OwnerResponse { owner })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
