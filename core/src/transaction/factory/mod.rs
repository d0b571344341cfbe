mod smart_contract;
mod transfer;

pub use smart_contract::SmartContractTransactionFactory;
pub use transfer::TransferTransactionsFactory;

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GAS_LIMIT_ESDT_NFT_TRANSFER, DEFAULT_GAS_LIMIT_ESDT_TRANSFER,
    DEFAULT_GAS_LIMIT_MULTI_ESDT_NFT_TRANSFER, DEFAULT_GAS_LIMIT_PER_BYTE, DEFAULT_MIN_GAS_LIMIT,
    TRANSACTION_OPTIONS_DEFAULT, TRANSACTION_VERSION_DEFAULT,
};

/// Chain and gas parameters injected into the factories at construction.
/// Read-only once built: the factories never mutate it, which keeps every
/// factory call a pure function of its inputs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionsFactoryConfig {
    pub chain_id: String,
    pub min_gas_limit: u64,
    pub gas_limit_per_byte: u64,
    pub gas_limit_esdt_transfer: u64,
    pub gas_limit_esdt_nft_transfer: u64,
    pub gas_limit_multi_esdt_nft_transfer: u64,
    pub version: u32,
    pub options: u32,
}

impl TransactionsFactoryConfig {
    /// Config for the given network, with the protocol defaults for
    /// everything else. Fields are public so callers can override them.
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            min_gas_limit: DEFAULT_MIN_GAS_LIMIT,
            gas_limit_per_byte: DEFAULT_GAS_LIMIT_PER_BYTE,
            gas_limit_esdt_transfer: DEFAULT_GAS_LIMIT_ESDT_TRANSFER,
            gas_limit_esdt_nft_transfer: DEFAULT_GAS_LIMIT_ESDT_NFT_TRANSFER,
            gas_limit_multi_esdt_nft_transfer: DEFAULT_GAS_LIMIT_MULTI_ESDT_NFT_TRANSFER,
            version: TRANSACTION_VERSION_DEFAULT,
            options: TRANSACTION_OPTIONS_DEFAULT,
        }
    }
}
