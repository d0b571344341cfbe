mod address;

pub use address::{Address, Bech32Codec, PUBLIC_KEY_SIZE};
