//! Bridged Token - Fungible Ledger for One Side of the Token Bridge
//!
//! Holds per-account balances and the total supply. Supply can only change
//! through `BridgeMint` / `BridgeBurn`, and only when called by the configured
//! bridge address. The owner (the instantiating account) sets and re-sets that
//! address; until it is set every mint and burn fails.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
