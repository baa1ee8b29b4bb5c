//! Token Bridge Contract - Signature-Authorized Burn and Mint
//!
//! Moves balance between two ledgers by burning on the source side and minting
//! on the destination side. Every transfer is authorized by the holder's
//! secp256k1 signature over a message hash that embeds the holder's current
//! bridge nonce, not by the caller's identity, so any relaying agent may
//! submit it.
//!
//! # Outgoing Flow (Burn)
//! 1. Holder queries `MessageHash { account, amount }` and signs it
//! 2. Anyone submits `SendTokens` with the signature
//! 3. Bridge burns the amount from the holder on the token contract
//!
//! # Incoming Flow (Mint)
//! 1. Relaying agent observes the burn on the other side
//! 2. Holder signs this bridge's current `MessageHash`
//! 3. Anyone submits `ReceiveTokens`; the bridge mints and advances the nonce
//!
//! # Replay Protection
//! - `ReceiveTokens` consumes the nonce, so a signature mints at most once
//! - `SendTokens` leaves the nonce untouched; a replayed burn is stopped only
//!   by the holder's balance running out
//! - The message hash carries no direction. While the nonce is still `n`, a
//!   signature handed over for `SendTokens` at `n` also authorizes
//!   `ReceiveTokens` for the same amount on this bridge, and on any other
//!   bridge where the account's nonce is `n`. Holders should treat every
//!   signature as a grant for both paths.

pub mod contract;
pub mod error;
mod execute;
pub mod intent;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
