use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

pub mod builder;
pub mod factory;

/// An unsigned transaction draft, ready to be handed to a signing and
/// broadcast collaborator. Never mutated after construction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Account paying for the transaction
    sender: Address,
    /// Account or contract the transaction is addressed to
    receiver: Address,
    /// Native amount moved, in minor units (0 when none)
    value: U256,
    /// Payload interpreted by the receiving contract or by the protocol's
    /// built-in token transfer handlers
    data: String,
    /// Maximum computational budget
    gas_limit: u64,
    /// Network the transaction is valid on
    chain_id: String,
    version: u32,
    options: u32,
}

impl Transaction {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sender: Address,
        receiver: Address,
        value: U256,
        data: String,
        gas_limit: u64,
        chain_id: String,
        version: u32,
        options: u32,
    ) -> Self {
        Self {
            sender,
            receiver,
            value,
            data,
            gas_limit,
            chain_id,
            version,
            options,
        }
    }

    pub fn get_sender(&self) -> &Address {
        &self.sender
    }

    pub fn get_receiver(&self) -> &Address {
        &self.receiver
    }

    pub fn get_value(&self) -> U256 {
        self.value
    }

    pub fn get_data(&self) -> &str {
        &self.data
    }

    pub fn get_gas_limit(&self) -> u64 {
        self.gas_limit
    }

    pub fn get_chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn get_version(&self) -> u32 {
        self.version
    }

    pub fn get_options(&self) -> u32 {
        self.options
    }
}
