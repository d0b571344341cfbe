mod transfers;

pub use transfers::TokenTransfersDataBuilder;

use log::debug;
use primitive_types::U256;
use thiserror::Error;

use super::{factory::TransactionsFactoryConfig, Transaction};
use crate::{config::ARG_SEPARATOR, crypto::Address};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Empty transfers")]
    EmptyTransfers,
    #[error("Can't send both a native amount and token transfers")]
    ConflictingTransfers,
    #[error("Missing contract bytecode")]
    MissingBytecode,
}

/// Assembles the data field, gas limit and envelope fields into a draft.
/// Not a signer: the output still has to go through the signing
/// collaborator before broadcast.
pub struct TransactionBuilder<'a> {
    config: &'a TransactionsFactoryConfig,
    sender: Address,
    receiver: Address,
    data_parts: Vec<String>,
    gas_limit: u64,
    add_data_movement_gas: bool,
    value: U256,
}

impl<'a> TransactionBuilder<'a> {
    pub fn new(
        config: &'a TransactionsFactoryConfig,
        sender: Address,
        receiver: Address,
        data_parts: Vec<String>,
        gas_limit: u64,
        add_data_movement_gas: bool,
    ) -> Self {
        Self {
            config,
            sender,
            receiver,
            data_parts,
            gas_limit,
            add_data_movement_gas,
            value: U256::zero(),
        }
    }

    /// Set the native amount carried by the transaction
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    fn compute_data_field(&self) -> String {
        self.data_parts.join(ARG_SEPARATOR)
    }

    // When movement gas is requested, the caller-supplied gas limit acts as
    // an additive extra on top of the per-byte cost. Otherwise it is the
    // total budget, taken verbatim.
    fn compute_gas_limit(&self, data: &str) -> u64 {
        if !self.add_data_movement_gas {
            return self.gas_limit;
        }

        let data_movement_gas =
            self.config.min_gas_limit + self.config.gas_limit_per_byte * data.len() as u64;
        data_movement_gas + self.gas_limit
    }

    pub fn build(self) -> Transaction {
        let data = self.compute_data_field();
        let gas_limit = self.compute_gas_limit(&data);
        debug!(
            "assembled draft: {} data bytes, gas limit {}",
            data.len(),
            gas_limit
        );

        Transaction::new(
            self.sender,
            self.receiver,
            self.value,
            data,
            gas_limit,
            self.config.chain_id.clone(),
            self.config.version,
            self.config.options,
        )
    }
}
