//! Off-chain intent signing
//!
//! Used by relaying agents (and tests) to produce the signature the bridge
//! expects: the holder queries `MessageHash { account, amount }`, signs the
//! returned digest with [`IntentSigner::sign_hash`], and submits the 65-byte
//! result to `SendTokens` or `ReceiveTokens`.

use cosmwasm_std::{Binary, StdResult};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey, SECP256K1};

use crate::hash::compute_message_hash;
use crate::signature::SignerId;

/// A secp256k1 key that signs transfer intents
pub struct IntentSigner {
    secret_key: SecretKey,
    signer_id: SignerId,
}

impl IntentSigner {
    /// Create a signer from a 32-byte secret key
    pub fn from_bytes(secret: &[u8]) -> Result<Self, secp256k1::Error> {
        let secret_key = SecretKey::from_slice(secret)?;
        let public_key = PublicKey::from_secret_key(&Secp256k1::signing_only(), &secret_key);
        let signer_id = SignerId::from_uncompressed_pubkey(&public_key.serialize_uncompressed())
            .ok_or(secp256k1::Error::InvalidPublicKey)?;

        Ok(Self {
            secret_key,
            signer_id,
        })
    }

    /// Create a signer from a hex secret key (with or without 0x prefix)
    pub fn from_hex(secret_hex: &str) -> Result<Self, secp256k1::Error> {
        let secret_hex = secret_hex.strip_prefix("0x").unwrap_or(secret_hex);
        let bytes = hex::decode(secret_hex).map_err(|_| secp256k1::Error::InvalidSecretKey)?;
        Self::from_bytes(&bytes)
    }

    pub fn signer_id(&self) -> SignerId {
        self.signer_id
    }

    /// The bech32 account this key controls on a chain with prefix `hrp`
    pub fn account(&self, hrp: &str) -> StdResult<String> {
        self.signer_id.to_bech32(hrp)
    }

    /// Sign a 32-byte message hash, returning `r || s || v` with `v` in {0, 1}
    pub fn sign_hash(&self, message_hash: &[u8; 32]) -> Binary {
        let message = Message::from_digest(*message_hash);
        let sig = SECP256K1.sign_ecdsa_recoverable(&message, &self.secret_key);
        let (recovery_id, compact) = sig.serialize_compact();

        let mut out = Vec::with_capacity(65);
        out.extend_from_slice(&compact);
        out.push(recovery_id.to_i32() as u8);
        Binary::from(out)
    }

    /// Compute and sign the intent hash for `account` at `nonce`
    pub fn sign_intent(&self, account: &str, amount: u128, nonce: u64) -> Binary {
        self.sign_hash(&compute_message_hash(account, amount, nonce))
    }
}
