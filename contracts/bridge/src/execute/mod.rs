//! Execute handlers for the token bridge contract.
//!
//! - `outgoing` - SendTokens, burning on this side
//! - `incoming` - ReceiveTokens, minting on this side and consuming a nonce

mod incoming;
mod outgoing;

pub use incoming::*;
pub use outgoing::*;
