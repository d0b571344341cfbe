use crate::crypto::Address;

// Separator between the segments of the transaction data field
pub const ARG_SEPARATOR: &str = "@";

// VM type marker placed right after the bytecode on deploy
// 0x0500 selects the WASM VM
pub const VM_TYPE_WASM_VM: [u8; 2] = [0x05, 0x00];

// Reserved system address receiving every contract deploy transaction
// Bech32 form: erd1qqqqqqqqqqqqqqqpqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqzllls8a5w6u
pub const CONTRACT_DEPLOY_ADDRESS: Address = Address::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xff, 0xff,
]);

// Reserved operation keywords, carried as raw ASCII in the first segment
// of their scenario (never hex-encoded)
pub const ESDT_TRANSFER_FUNCTION: &str = "ESDTTransfer";
pub const ESDT_NFT_TRANSFER_FUNCTION: &str = "ESDTNFTTransfer";
pub const MULTI_ESDT_NFT_TRANSFER_FUNCTION: &str = "MultiESDTNFTTransfer";
pub const UPGRADE_CONTRACT_FUNCTION: &str = "upgradeContract";

// ===== GAS MODEL DEFAULTS =====

// Base cost charged to every transaction
pub const DEFAULT_MIN_GAS_LIMIT: u64 = 50_000;
// Movement cost per byte of the data field
pub const DEFAULT_GAS_LIMIT_PER_BYTE: u64 = 1_500;

// Additive cost of the token transfer builtins, per scenario
pub const DEFAULT_GAS_LIMIT_ESDT_TRANSFER: u64 = 200_000;
pub const DEFAULT_GAS_LIMIT_ESDT_NFT_TRANSFER: u64 = 200_000;
pub const DEFAULT_GAS_LIMIT_MULTI_ESDT_NFT_TRANSFER: u64 = 200_000;

// Transaction envelope defaults stamped on every draft
pub const TRANSACTION_VERSION_DEFAULT: u32 = 2;
pub const TRANSACTION_OPTIONS_DEFAULT: u32 = 0;
