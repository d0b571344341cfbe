use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// A typed call argument.
///
/// The set is closed on purpose: every variant has exactly one wire
/// encoding, so serialization cannot fail and unsupported values cannot be
/// constructed in the first place.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TxArg {
    /// Raw bytes, hex-encoded as-is (may be empty)
    Bytes(Vec<u8>),
    /// Non-negative integer, minimal big-endian hex padded to even length
    Number(U256),
    /// Account identifier, 64 hex characters
    Addr(Address),
    /// UTF-8 text, hex encoding of its bytes
    Text(String),
}

impl From<Vec<u8>> for TxArg {
    fn from(bytes: Vec<u8>) -> Self {
        TxArg::Bytes(bytes)
    }
}

impl From<&[u8]> for TxArg {
    fn from(bytes: &[u8]) -> Self {
        TxArg::Bytes(bytes.to_vec())
    }
}

impl From<U256> for TxArg {
    fn from(value: U256) -> Self {
        TxArg::Number(value)
    }
}

impl From<u64> for TxArg {
    fn from(value: u64) -> Self {
        TxArg::Number(U256::from(value))
    }
}

impl From<Address> for TxArg {
    fn from(address: Address) -> Self {
        TxArg::Addr(address)
    }
}

impl From<String> for TxArg {
    fn from(text: String) -> Self {
        TxArg::Text(text)
    }
}

impl From<&str> for TxArg {
    fn from(text: &str) -> Self {
        TxArg::Text(text.to_owned())
    }
}

/// Encode one argument into its data-field segment.
pub fn arg_to_string(arg: &TxArg) -> String {
    match arg {
        TxArg::Bytes(bytes) => hex::encode(bytes),
        TxArg::Number(value) => number_to_padded_hex(value),
        TxArg::Addr(address) => address.to_hex(),
        TxArg::Text(text) => hex::encode(text.as_bytes()),
    }
}

/// Encode a sequence of arguments, preserving their order.
pub fn args_to_strings(args: &[TxArg]) -> Vec<String> {
    args.iter().map(arg_to_string).collect()
}

// Minimal big-endian representation, byte aligned so the hex is always of
// even length. Zero keeps one padded byte ("00"), the minimal digit string
// "0" padded to even length per the protocol reference.
fn number_to_padded_hex(value: &U256) -> String {
    let bytes = value.to_big_endian();
    let first = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len() - 1);
    hex::encode(&bytes[first..])
}
