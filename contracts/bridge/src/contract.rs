//! Token bridge entry points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{execute_receive_tokens, execute_send_tokens};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_current_nonce, query_message_hash, query_verify_signature,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = deps.api.addr_validate(&msg.token)?;
    CONFIG.save(deps.storage, &Config { token: token.clone() })?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("token", token))
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
        ExecuteMsg::SendTokens {
            account,
            amount,
            signature,
        } => execute_send_tokens(deps, info, account, amount, signature),
        ExecuteMsg::ReceiveTokens {
            account,
            amount,
            signature,
        } => execute_receive_tokens(deps, info, account, amount, signature),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CurrentNonce { account } => {
            to_json_binary(&query_current_nonce(deps, account)?)
        }
        QueryMsg::MessageHash { account, amount } => {
            to_json_binary(&query_message_hash(deps, account, amount)?)
        }
        QueryMsg::VerifySignature {
            signer,
            message_hash,
            signature,
        } => to_json_binary(&query_verify_signature(
            deps,
            signer,
            message_hash,
            signature,
        )?),
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{ConfigResponse, MessageHashResponse, NonceResponse, VerifySignatureResponse};
    use common::{compute_message_hash, IntentSigner};
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info, MockApi, MockQuerier};
    use cosmwasm_std::{from_json, CosmosMsg, MemoryStorage, OwnedDeps, Uint128, WasmMsg};
    use token::msg::ExecuteMsg as TokenExecuteMsg;

    const TOKEN_ADDR: &str = "terra1token";
    const RELAYER_ADDR: &str = "terra1relayer";

    fn setup() -> OwnedDeps<MemoryStorage, MockApi, MockQuerier> {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("terra1deployer", &[]),
            InstantiateMsg {
                token: TOKEN_ADDR.to_string(),
            },
        )
        .unwrap();
        deps
    }

    fn holder() -> (IntentSigner, String) {
        let signer = IntentSigner::from_bytes(&[0x11; 32]).unwrap();
        let account = signer.account("terra").unwrap();
        (signer, account)
    }

    fn nonce_of(deps: Deps, account: &str) -> u64 {
        let res: NonceResponse = from_json(
            query(
                deps,
                mock_env(),
                QueryMsg::CurrentNonce {
                    account: account.to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        res.nonce
    }

    fn token_call(res: &Response) -> TokenExecuteMsg {
        assert_eq!(res.messages.len(), 1);
        match &res.messages[0].msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, TOKEN_ADDR);
                assert!(funds.is_empty());
                from_json(msg).unwrap()
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_instantiate_records_token() {
        let deps = setup();
        let res: ConfigResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap()).unwrap();
        assert_eq!(res.token.as_str(), TOKEN_ADDR);

        let version = cw2::get_contract_version(&deps.storage).unwrap();
        assert_eq!(version.contract, CONTRACT_NAME);
    }

    #[test]
    fn test_send_tokens_dispatches_burn_without_consuming_nonce() {
        let mut deps = setup();
        let (signer, account) = holder();
        let signature = signer.sign_intent(&account, 25, 0);

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(RELAYER_ADDR, &[]),
            ExecuteMsg::SendTokens {
                account: account.clone(),
                amount: Uint128::new(25),
                signature: signature.clone(),
            },
        )
        .unwrap();

        assert_eq!(
            token_call(&res),
            TokenExecuteMsg::BridgeBurn {
                account: account.clone(),
                amount: Uint128::new(25),
            }
        );
        assert_eq!(res.attributes[0].value, "send_tokens");
        assert_eq!(nonce_of(deps.as_ref(), &account), 0);

        // same signature still authorizes a burn; the balance is the only guard
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info(RELAYER_ADDR, &[]),
            ExecuteMsg::SendTokens {
                account: account.clone(),
                amount: Uint128::new(25),
                signature,
            },
        )
        .unwrap();
        assert_eq!(nonce_of(deps.as_ref(), &account), 0);
    }

    #[test]
    fn test_receive_tokens_dispatches_mint_and_consumes_nonce() {
        let mut deps = setup();
        let (signer, account) = holder();
        let signature = signer.sign_intent(&account, 1, 0);

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(RELAYER_ADDR, &[]),
            ExecuteMsg::ReceiveTokens {
                account: account.clone(),
                amount: Uint128::new(1),
                signature: signature.clone(),
            },
        )
        .unwrap();

        assert_eq!(
            token_call(&res),
            TokenExecuteMsg::BridgeMint {
                account: account.clone(),
                amount: Uint128::new(1),
            }
        );
        let attr = |key: &str| {
            res.attributes
                .iter()
                .find(|a| a.key == key)
                .map(|a| a.value.clone())
                .unwrap()
        };
        assert_eq!(attr("action"), "receive_tokens");
        assert_eq!(attr("nonce"), "0");
        assert_eq!(attr("next_nonce"), "1");
        assert_eq!(
            attr("message_hash"),
            common::bytes32_to_hex(&compute_message_hash(&account, 1, 0))
        );
        assert_eq!(nonce_of(deps.as_ref(), &account), 1);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(RELAYER_ADDR, &[]),
            ExecuteMsg::ReceiveTokens {
                account: account.clone(),
                amount: Uint128::new(1),
                signature,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature);
        assert_eq!(nonce_of(deps.as_ref(), &account), 1);
    }

    #[test]
    fn test_invalid_signature_leaves_nonce() {
        let mut deps = setup();
        let (_, account) = holder();
        let intruder = IntentSigner::from_bytes(&[0x22; 32]).unwrap();

        for msg in [
            ExecuteMsg::ReceiveTokens {
                account: account.clone(),
                amount: Uint128::new(5),
                signature: intruder.sign_intent(&account, 5, 0),
            },
            ExecuteMsg::SendTokens {
                account: account.clone(),
                amount: Uint128::new(5),
                signature: Binary::from(vec![0u8; 10]),
            },
        ] {
            let err = execute(deps.as_mut(), mock_env(), mock_info(RELAYER_ADDR, &[]), msg)
                .unwrap_err();
            assert_eq!(err, ContractError::InvalidSignature);
        }
        assert_eq!(nonce_of(deps.as_ref(), &account), 0);
    }

    #[test]
    fn test_non_bech32_account_never_verifies() {
        let mut deps = setup();
        let (signer, _) = holder();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(RELAYER_ADDR, &[]),
            ExecuteMsg::ReceiveTokens {
                account: "terra1user".to_string(),
                amount: Uint128::new(5),
                signature: signer.sign_intent("terra1user", 5, 0),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature);
    }

    #[test]
    fn test_nonce_overflow() {
        let mut deps = setup();
        let (signer, account) = holder();
        crate::state::NONCES
            .save(
                &mut deps.storage,
                &cosmwasm_std::Addr::unchecked(&account),
                &u64::MAX,
            )
            .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(RELAYER_ADDR, &[]),
            ExecuteMsg::ReceiveTokens {
                account: account.clone(),
                amount: Uint128::new(1),
                signature: signer.sign_intent(&account, 1, u64::MAX),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::NonceOverflow { .. }));
        assert_eq!(nonce_of(deps.as_ref(), &account), u64::MAX);
    }

    #[test]
    fn test_message_hash_and_verify_queries() {
        let deps = setup();
        let (signer, account) = holder();

        let res: MessageHashResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::MessageHash {
                    account: account.clone(),
                    amount: Uint128::new(9),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert_eq!(res.nonce, 0);
        assert_eq!(
            res.message_hash.as_slice(),
            compute_message_hash(&account, 9, 0).as_slice()
        );

        let mut hash = [0u8; 32];
        hash.copy_from_slice(res.message_hash.as_slice());
        let signature = signer.sign_hash(&hash);

        let verify = |signer: &str, signature: Binary| -> bool {
            let answer: VerifySignatureResponse = from_json(
                query(
                    deps.as_ref(),
                    mock_env(),
                    QueryMsg::VerifySignature {
                        signer: signer.to_string(),
                        message_hash: res.message_hash.clone(),
                        signature,
                    },
                )
                .unwrap(),
            )
            .unwrap();
            answer.valid
        };

        assert!(verify(&account, signature.clone()));
        assert!(!verify("terra19dddt3retspx298cx9785g27yxxue4k0l52svp", signature));
        assert!(!verify(&account, Binary::from(vec![1u8; 3])));
        assert!(!verify("not an address", Binary::default()));
    }
}
