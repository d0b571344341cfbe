use log::debug;
use primitive_types::U256;

use super::TransactionsFactoryConfig;
use crate::{
    crypto::Address,
    tokens::{TokenComputer, TokenTransfer},
    transaction::{
        builder::{GenerationError, TokenTransfersDataBuilder, TransactionBuilder},
        Transaction,
    },
};

/// Builds pure value-transfer drafts: native currency or tokens.
pub struct TransferTransactionsFactory {
    config: TransactionsFactoryConfig,
    data_args_builder: TokenTransfersDataBuilder,
}

impl TransferTransactionsFactory {
    pub fn new(config: TransactionsFactoryConfig) -> Self {
        Self {
            config,
            data_args_builder: TokenTransfersDataBuilder,
        }
    }

    /// Move a native amount, with an optional attached data string. Gas is
    /// pure data movement cost.
    pub fn create_transaction_for_native_token_transfer(
        &self,
        sender: Address,
        receiver: Address,
        native_amount: U256,
        data: Option<&str>,
    ) -> Transaction {
        let transaction_data = data.unwrap_or_default().to_owned();

        TransactionBuilder::new(
            &self.config,
            sender,
            receiver,
            vec![transaction_data],
            0,
            true,
        )
        .with_value(native_amount)
        .build()
    }

    /// Move one or more tokens. The gas extra and the effective receiver
    /// depend on the scenario: single fungible transfers go straight to the
    /// destination, NFT and multi transfers are routed through the sender.
    pub fn create_transaction_for_esdt_token_transfer(
        &self,
        sender: Address,
        receiver: Address,
        token_transfers: &[TokenTransfer],
    ) -> Result<Transaction, GenerationError> {
        let (transfer_args, extra_gas_for_transfer, effective_receiver) = match token_transfers {
            [] => return Err(GenerationError::EmptyTransfers),
            [transfer] if TokenComputer::is_fungible(transfer.get_token()) => (
                self.data_args_builder.build_args_for_esdt_transfer(transfer),
                self.config.gas_limit_esdt_transfer,
                receiver,
            ),
            [transfer] => (
                self.data_args_builder
                    .build_args_for_single_esdt_nft_transfer(transfer, &receiver),
                self.config.gas_limit_esdt_nft_transfer,
                sender,
            ),
            transfers => (
                self.data_args_builder
                    .build_args_for_multi_esdt_nft_transfer(&receiver, transfers),
                self.config.gas_limit_multi_esdt_nft_transfer,
                sender,
            ),
        };

        debug!("token transfer draft: {} transfers", token_transfers.len());
        Ok(TransactionBuilder::new(
            &self.config,
            sender,
            effective_receiver,
            transfer_args,
            extra_gas_for_transfer,
            true,
        )
        .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{crypto::PUBLIC_KEY_SIZE, tokens::Token};

    fn factory() -> TransferTransactionsFactory {
        TransferTransactionsFactory::new(TransactionsFactoryConfig::new("D"))
    }

    fn sender() -> Address {
        Address::new([0x01; PUBLIC_KEY_SIZE])
    }

    fn receiver() -> Address {
        Address::new([0x02; PUBLIC_KEY_SIZE])
    }

    #[test]
    fn test_native_transfer_without_data() {
        let config = TransactionsFactoryConfig::new("D");
        let tx = factory().create_transaction_for_native_token_transfer(
            sender(),
            receiver(),
            U256::from(100u64),
            None,
        );

        assert_eq!(tx.get_data(), "");
        assert_eq!(tx.get_value(), U256::from(100u64));
        assert_eq!(tx.get_receiver(), &receiver());
        assert_eq!(tx.get_gas_limit(), config.min_gas_limit);
    }

    #[test]
    fn test_native_transfer_with_data() {
        let config = TransactionsFactoryConfig::new("D");
        let tx = factory().create_transaction_for_native_token_transfer(
            sender(),
            receiver(),
            U256::from(100u64),
            Some("hello"),
        );

        assert_eq!(tx.get_data(), "hello");
        assert_eq!(
            tx.get_gas_limit(),
            config.min_gas_limit + config.gas_limit_per_byte * 5
        );
    }

    #[test]
    fn test_esdt_transfer() {
        let config = TransactionsFactoryConfig::new("D");
        let transfer = TokenTransfer::new(Token::fungible("USDC-abc123"), U256::from(1000u64));
        let tx = factory()
            .create_transaction_for_esdt_token_transfer(sender(), receiver(), &[transfer])
            .unwrap();

        let expected_data = "ESDTTransfer@555344432d616263313233@03e8";
        assert_eq!(tx.get_data(), expected_data);
        assert_eq!(tx.get_receiver(), &receiver());
        assert_eq!(
            tx.get_gas_limit(),
            config.min_gas_limit
                + config.gas_limit_per_byte * expected_data.len() as u64
                + config.gas_limit_esdt_transfer
        );
    }

    #[test]
    fn test_single_nft_transfer_routes_through_sender() {
        let config = TransactionsFactoryConfig::new("D");
        let transfer = TokenTransfer::new(Token::from_extended("MYNFT-ab12-01"), U256::from(1u64));
        let tx = factory()
            .create_transaction_for_esdt_token_transfer(sender(), receiver(), &[transfer])
            .unwrap();

        assert_eq!(tx.get_receiver(), &sender());
        let expected_data = format!(
            "ESDTNFTTransfer@4d594e46542d61623132@01@01@{}",
            receiver().to_hex()
        );
        assert_eq!(tx.get_data(), expected_data);
        assert_eq!(
            tx.get_gas_limit(),
            config.min_gas_limit
                + config.gas_limit_per_byte * expected_data.len() as u64
                + config.gas_limit_esdt_nft_transfer
        );
    }

    #[test]
    fn test_multi_transfer() {
        let config = TransactionsFactoryConfig::new("D");
        let transfers = [
            TokenTransfer::new(Token::fungible("USDC-abc123"), U256::from(1000u64)),
            TokenTransfer::new(Token::new("MYNFT-ab12", 7), U256::from(1u64)),
        ];
        let tx = factory()
            .create_transaction_for_esdt_token_transfer(sender(), receiver(), &transfers)
            .unwrap();

        assert_eq!(tx.get_receiver(), &sender());
        let expected_data = format!(
            "MultiESDTNFTTransfer@555344432d616263313233@00@03e8@4d594e46542d61623132@07@01@{}@02",
            receiver().to_hex()
        );
        assert_eq!(tx.get_data(), expected_data);
        assert_eq!(
            tx.get_gas_limit(),
            config.min_gas_limit
                + config.gas_limit_per_byte * expected_data.len() as u64
                + config.gas_limit_multi_esdt_nft_transfer
        );
    }

    #[test]
    fn test_rejects_empty_transfer_list() {
        let result = factory().create_transaction_for_esdt_token_transfer(sender(), receiver(), &[]);
        assert_eq!(result.unwrap_err(), GenerationError::EmptyTransfers);
    }

    #[test]
    fn test_draft_json_shape() {
        let tx = factory().create_transaction_for_native_token_transfer(
            sender(),
            receiver(),
            U256::from(1000u64),
            None,
        );

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["sender"], serde_json::json!("01".repeat(32)));
        assert_eq!(json["receiver"], serde_json::json!("02".repeat(32)));
        assert_eq!(json["value"], serde_json::json!("0x3e8"));
        assert_eq!(json["data"], serde_json::json!(""));
        assert_eq!(json["gas_limit"], serde_json::json!(50_000));
        assert_eq!(json["chain_id"], serde_json::json!("D"));
        assert_eq!(json["version"], serde_json::json!(2));
        assert_eq!(json["options"], serde_json::json!(0));
    }
}
