use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

pub const PUBLIC_KEY_SIZE: usize = 32; // 32 bytes / 256 bits

/// An account identifier, already validated upstream.
/// The core only needs its raw bytes and their hex form; the bech32
/// representation is produced by an external codec.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Address([u8; PUBLIC_KEY_SIZE]);

impl Address {
    pub const fn new(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Address(bytes)
    }

    pub const fn zero() -> Self {
        Address::new([0; PUBLIC_KEY_SIZE])
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    // Bech32 encoding is not done here, the codec comes from the caller
    pub fn to_bech32<C: Bech32Codec>(&self, codec: &C) -> String {
        codec.encode(&self.0)
    }
}

/// Seam for the external bech32 codec.
pub trait Bech32Codec {
    fn encode(&self, bytes: &[u8; PUBLIC_KEY_SIZE]) -> String;
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; PUBLIC_KEY_SIZE] = bytes.try_into().map_err(|_| "Invalid address")?;
        Ok(Address::new(bytes))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() != PUBLIC_KEY_SIZE * 2 {
            return Err(SerdeError::custom("Invalid hex length"));
        }

        let decoded_hex = hex::decode(hex).map_err(SerdeError::custom)?;
        let bytes: [u8; PUBLIC_KEY_SIZE] = decoded_hex
            .try_into()
            .map_err(|_| SerdeError::custom("Could not transform hex to bytes array for Address"))?;
        Ok(Address::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let address = Address::new([0xAB; PUBLIC_KEY_SIZE]);
        let hex = address.to_hex();
        assert_eq!(hex.len(), PUBLIC_KEY_SIZE * 2);
        assert_eq!(Address::from_str(&hex).unwrap(), address);
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(Address::from_str("abcd").is_err());
        assert!(Address::from_str("not hex at all").is_err());
    }

    struct UppercaseHexCodec;

    impl Bech32Codec for UppercaseHexCodec {
        fn encode(&self, bytes: &[u8; PUBLIC_KEY_SIZE]) -> String {
            hex::encode_upper(bytes)
        }
    }

    #[test]
    fn test_bech32_goes_through_codec() {
        let address = Address::new([0xAB; PUBLIC_KEY_SIZE]);
        assert_eq!(address.to_bech32(&UppercaseHexCodec), "AB".repeat(32));
    }
}
