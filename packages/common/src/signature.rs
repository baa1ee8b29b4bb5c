//! Signer recovery and account binding
//!
//! Recovery is a pure `(message_hash, signature) -> SignerId` function behind
//! [`SignatureScheme`], so the bridge's nonce and mint/burn logic never sees
//! the curve or the address derivation.
//!
//! The default scheme, [`Secp256k1Keccak`], recovers a secp256k1 public key
//! through the chain's `Api` and derives the Ethereum-style identity
//! `keccak256(pubkey[1..65])[12..32]`. An account is bound to a signer when
//! the account's bech32 data part is exactly that 20-byte identity.

use bech32::{FromBase32, ToBase32, Variant};
use cosmwasm_std::{Api, StdError, StdResult};

use crate::hash::keccak256;

/// Signature length: 64-byte compact `r || s` followed by the recovery byte `v`
pub const SIGNATURE_LENGTH: usize = 65;

/// Length of an uncompressed SEC1 public key (`0x04 || X || Y`)
const UNCOMPRESSED_PUBKEY_LENGTH: usize = 65;

/// 20-byte signer identity recovered from a signature
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SignerId([u8; 20]);

impl SignerId {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Derive the identity from an uncompressed secp256k1 public key
    pub fn from_uncompressed_pubkey(pubkey: &[u8]) -> Option<Self> {
        if pubkey.len() != UNCOMPRESSED_PUBKEY_LENGTH || pubkey[0] != 0x04 {
            return None;
        }
        let digest = keccak256(&pubkey[1..]);
        let mut id = [0u8; 20];
        id.copy_from_slice(&digest[12..]);
        Some(Self(id))
    }

    /// Decode the identity an account string is bound to.
    ///
    /// Returns `None` for anything that is not a bech32 (not bech32m) string
    /// carrying exactly 20 bytes of data.
    pub fn from_bech32(account: &str) -> Option<Self> {
        let (_hrp, data, variant) = bech32::decode(account).ok()?;
        if variant != Variant::Bech32 {
            return None;
        }
        let bytes = Vec::<u8>::from_base32(&data).ok()?;
        let id: [u8; 20] = bytes.try_into().ok()?;
        Some(Self(id))
    }

    /// Render as a bech32 account with the given human-readable prefix
    pub fn to_bech32(&self, hrp: &str) -> StdResult<String> {
        bech32::encode(hrp, self.0.to_base32(), Variant::Bech32)
            .map_err(|e| StdError::generic_err(format!("Failed to encode bech32: {}", e)))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

/// A signature scheme that can recover the signer of a 32-byte message hash.
///
/// Implementations must never panic on malformed input; they return `None`.
pub trait SignatureScheme {
    fn recover(&self, api: &dyn Api, message_hash: &[u8], signature: &[u8]) -> Option<SignerId>;
}

/// secp256k1 ECDSA with keccak256 address derivation
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1Keccak;

impl SignatureScheme for Secp256k1Keccak {
    fn recover(&self, api: &dyn Api, message_hash: &[u8], signature: &[u8]) -> Option<SignerId> {
        if message_hash.len() != 32 || signature.len() != SIGNATURE_LENGTH {
            return None;
        }

        // Accept both raw (0/1) and Ethereum-style (27/28) recovery bytes
        let recovery_param = match signature[64] {
            v @ (0 | 1) => v,
            v @ (27 | 28) => v - 27,
            _ => return None,
        };

        let pubkey = api
            .secp256k1_recover_pubkey(message_hash, &signature[..64], recovery_param)
            .ok()?;
        SignerId::from_uncompressed_pubkey(&pubkey)
    }
}

/// Check that `signature` over `message_hash` was produced by the key bound to
/// `expected_signer`. Any malformed input yields `false`.
pub fn verify_signature<S: SignatureScheme + ?Sized>(
    scheme: &S,
    api: &dyn Api,
    expected_signer: &str,
    message_hash: &[u8],
    signature: &[u8],
) -> bool {
    let Some(expected) = SignerId::from_bech32(expected_signer) else {
        return false;
    };
    scheme.recover(api, message_hash, signature) == Some(expected)
}
