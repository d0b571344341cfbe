use crate::{
    config::{
        ESDT_NFT_TRANSFER_FUNCTION, ESDT_TRANSFER_FUNCTION, MULTI_ESDT_NFT_TRANSFER_FUNCTION,
    },
    crypto::Address,
    serializer::{arg_to_string, TxArg},
    tokens::TokenTransfer,
};

/// Produces the ordered data-field segments for the three token transfer
/// scenarios. Input order is wire order: reordering the transfers changes
/// the bytes the chain sees.
#[derive(Default)]
pub struct TokenTransfersDataBuilder;

impl TokenTransfersDataBuilder {
    /// Single fungible transfer. The receiver stays the destination.
    pub fn build_args_for_esdt_transfer(&self, transfer: &TokenTransfer) -> Vec<String> {
        let mut args = vec![ESDT_TRANSFER_FUNCTION.to_owned()];
        args.push(arg_to_string(&TxArg::from(
            transfer.get_token().get_identifier(),
        )));
        args.push(arg_to_string(&TxArg::from(transfer.get_amount())));
        args
    }

    /// Single NFT/SFT transfer. The protocol routes it through the
    /// sender's own account, with the real destination as a trailing
    /// argument; the caller must set the effective receiver to the sender.
    pub fn build_args_for_single_esdt_nft_transfer(
        &self,
        transfer: &TokenTransfer,
        destination: &Address,
    ) -> Vec<String> {
        let token = transfer.get_token();
        let mut args = vec![ESDT_NFT_TRANSFER_FUNCTION.to_owned()];
        args.push(arg_to_string(&TxArg::from(token.get_identifier())));
        args.push(arg_to_string(&TxArg::from(token.get_nonce())));
        args.push(arg_to_string(&TxArg::from(transfer.get_amount())));
        args.push(destination.to_hex());
        args
    }

    /// Two or more transfers, any mix of fungible and not. Routed through
    /// the sender like the single NFT case.
    pub fn build_args_for_multi_esdt_nft_transfer(
        &self,
        destination: &Address,
        transfers: &[TokenTransfer],
    ) -> Vec<String> {
        let mut args = vec![MULTI_ESDT_NFT_TRANSFER_FUNCTION.to_owned()];
        for transfer in transfers {
            let token = transfer.get_token();
            args.push(arg_to_string(&TxArg::from(token.get_identifier())));
            args.push(arg_to_string(&TxArg::from(token.get_nonce())));
            args.push(arg_to_string(&TxArg::from(transfer.get_amount())));
        }
        args.push(destination.to_hex());
        args.push(arg_to_string(&TxArg::from(transfers.len() as u64)));
        args
    }
}
