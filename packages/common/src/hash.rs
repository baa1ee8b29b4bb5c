//! Transfer-intent hashing
//!
//! A transfer intent is the `(account, amount)` pair a holder authorizes, bound
//! to the account's current bridge nonce. Relaying agents and the bridge
//! contract must derive the identical digest, so the encoding is fixed and
//! versioned by a domain tag.
//!
//! # Byte Layout (128 bytes total, version 1)
//! - Bytes 0-31:   domain tag, `keccak256("TOKEN_BRIDGE_INTENT_V1")`
//! - Bytes 32-63:  `keccak256(account)` over the account's UTF-8 string
//! - Bytes 64-95:  amount (uint256, big-endian, left-padded)
//! - Bytes 96-127: nonce (uint256, big-endian, left-padded)

use tiny_keccak::{Hasher, Keccak};

/// Domain tag for version 1 of the intent encoding
pub const INTENT_DOMAIN_V1: &str = "TOKEN_BRIDGE_INTENT_V1";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Domain separator for version 1 intents
pub fn intent_domain() -> [u8; 32] {
    keccak256(INTENT_DOMAIN_V1.as_bytes())
}

/// Compute the message hash a holder signs to authorize `amount` for `account`
/// at `nonce`.
///
/// Equivalent to
/// `keccak256(abi.encode(domain, keccak256(bytes(account)), amount, nonce))`.
pub fn compute_message_hash(account: &str, amount: u128, nonce: u64) -> [u8; 32] {
    let mut data = [0u8; 128];

    data[0..32].copy_from_slice(&intent_domain());
    data[32..64].copy_from_slice(&keccak256(account.as_bytes()));

    // u128 amount occupies bytes 16-31 of its slot
    data[64 + 16..96].copy_from_slice(&amount.to_be_bytes());

    // u64 nonce occupies bytes 24-31 of its slot
    data[96 + 24..128].copy_from_slice(&nonce.to_be_bytes());

    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
