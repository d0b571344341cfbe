use log::debug;
use primitive_types::U256;

use super::TransactionsFactoryConfig;
use crate::{
    code_metadata::CodeMetadata,
    config::{CONTRACT_DEPLOY_ADDRESS, UPGRADE_CONTRACT_FUNCTION, VM_TYPE_WASM_VM},
    crypto::Address,
    serializer::{arg_to_string, args_to_strings, TxArg},
    tokens::{TokenComputer, TokenTransfer},
    transaction::{
        builder::{GenerationError, TokenTransfersDataBuilder, TransactionBuilder},
        Transaction,
    },
};

/// Builds deploy / execute / upgrade drafts. Stateless across calls: each
/// call is an independent function of its inputs and the injected config.
pub struct SmartContractTransactionFactory {
    config: TransactionsFactoryConfig,
    data_args_builder: TokenTransfersDataBuilder,
}

impl SmartContractTransactionFactory {
    pub fn new(config: TransactionsFactoryConfig) -> Self {
        Self {
            config,
            data_args_builder: TokenTransfersDataBuilder,
        }
    }

    /// Deploy `bytecode` as a new contract. The caller supplies the full
    /// gas budget; no movement gas is added on top.
    pub fn create_transaction_for_deploy(
        &self,
        sender: Address,
        bytecode: &[u8],
        gas_limit: u64,
        arguments: &[TxArg],
        native_transfer_amount: U256,
        metadata: CodeMetadata,
    ) -> Result<Transaction, GenerationError> {
        if bytecode.is_empty() {
            return Err(GenerationError::MissingBytecode);
        }

        let mut parts = vec![
            hex::encode(bytecode),
            hex::encode(VM_TYPE_WASM_VM),
            metadata.to_hex(),
        ];
        parts.extend(args_to_strings(arguments));

        debug!("deploy draft: {} bytes of bytecode", bytecode.len());
        Ok(TransactionBuilder::new(
            &self.config,
            sender,
            CONTRACT_DEPLOY_ADDRESS,
            parts,
            gas_limit,
            false,
        )
        .with_value(native_transfer_amount)
        .build())
    }

    /// Call `function` on `contract`, optionally moving a native amount or
    /// token transfers along with the call. Native amount and token
    /// transfers are mutually exclusive.
    #[allow(clippy::too_many_arguments)]
    pub fn create_transaction_for_execute(
        &self,
        sender: Address,
        contract: Address,
        function: &str,
        gas_limit: u64,
        arguments: &[TxArg],
        native_transfer_amount: U256,
        token_transfers: &[TokenTransfer],
    ) -> Result<Transaction, GenerationError> {
        if !native_transfer_amount.is_zero() && !token_transfers.is_empty() {
            return Err(GenerationError::ConflictingTransfers);
        }

        let mut receiver = contract;
        let mut parts: Vec<String> = match token_transfers {
            [] => vec![],
            [transfer] if TokenComputer::is_fungible(transfer.get_token()) => self
                .data_args_builder
                .build_args_for_esdt_transfer(transfer),
            [transfer] => {
                // NFT transfers into a contract go through the sender's own
                // account, the contract becomes a call argument
                receiver = sender;
                self.data_args_builder
                    .build_args_for_single_esdt_nft_transfer(transfer, &contract)
            }
            transfers => {
                receiver = sender;
                self.data_args_builder
                    .build_args_for_multi_esdt_nft_transfer(&contract, transfers)
            }
        };

        if parts.is_empty() {
            // first segment: the keyword itself, raw ASCII
            parts.push(function.to_owned());
        } else {
            // the function is an argument of the transfer builtin here
            parts.push(arg_to_string(&TxArg::from(function)));
        }
        parts.extend(args_to_strings(arguments));

        debug!(
            "execute draft: function {function}, {} token transfers",
            token_transfers.len()
        );
        Ok(
            TransactionBuilder::new(&self.config, sender, receiver, parts, gas_limit, false)
                .with_value(native_transfer_amount)
                .build(),
        )
    }

    /// Replace the code of an already deployed contract.
    #[allow(clippy::too_many_arguments)]
    pub fn create_transaction_for_upgrade(
        &self,
        sender: Address,
        contract: Address,
        bytecode: &[u8],
        gas_limit: u64,
        arguments: &[TxArg],
        native_transfer_amount: U256,
        metadata: CodeMetadata,
    ) -> Result<Transaction, GenerationError> {
        if bytecode.is_empty() {
            return Err(GenerationError::MissingBytecode);
        }

        let mut parts = vec![
            UPGRADE_CONTRACT_FUNCTION.to_owned(),
            hex::encode(bytecode),
            metadata.to_hex(),
        ];
        parts.extend(args_to_strings(arguments));

        debug!("upgrade draft for contract {contract}");
        Ok(
            TransactionBuilder::new(&self.config, sender, contract, parts, gas_limit, false)
                .with_value(native_transfer_amount)
                .build(),
        )
    }
}
