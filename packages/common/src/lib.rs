//! Common - Shared Intent Hashing and Signature Recovery for the Token Bridge
//!
//! This package holds everything both sides of a bridge transfer must agree on
//! byte-for-byte:
//! - `hash` - the versioned transfer-intent encoding and its keccak256 digest
//! - `signature` - secp256k1 signer recovery and account binding
//! - `signer` - off-chain intent signing (feature `signer`)

pub mod hash;
pub mod signature;
#[cfg(feature = "signer")]
pub mod signer;

pub use hash::{bytes32_to_hex, compute_message_hash, keccak256};
pub use signature::{verify_signature, Secp256k1Keccak, SignatureScheme, SignerId};
#[cfg(feature = "signer")]
pub use signer::IntentSigner;
