use serde::{Deserialize, Serialize};
use std::fmt;

// Reserved bit positions of the 2-byte metadata value
// First byte
const MASK_UPGRADEABLE: u8 = 0x01;
const MASK_READABLE: u8 = 0x04;
// Second byte
const MASK_PAYABLE: u8 = 0x02;
const MASK_PAYABLE_BY_SC: u8 = 0x04;

/// Contract mutability and payability flags, stored on chain alongside the
/// deployed code as a fixed 2-byte big-endian value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeMetadata {
    pub upgradeable: bool,
    pub readable: bool,
    pub payable: bool,
    pub payable_by_sc: bool,
}

impl CodeMetadata {
    pub fn new(upgradeable: bool, readable: bool, payable: bool, payable_by_sc: bool) -> Self {
        Self {
            upgradeable,
            readable,
            payable,
            payable_by_sc,
        }
    }

    /// Pack the active flags into the canonical 2-byte value.
    pub fn to_bytes(&self) -> [u8; 2] {
        let mut bytes = [0u8; 2];
        if self.upgradeable {
            bytes[0] |= MASK_UPGRADEABLE;
        }
        if self.readable {
            bytes[0] |= MASK_READABLE;
        }
        if self.payable {
            bytes[1] |= MASK_PAYABLE;
        }
        if self.payable_by_sc {
            bytes[1] |= MASK_PAYABLE_BY_SC;
        }
        bytes
    }

    /// Recover the flags from a packed value. Bits outside the reserved
    /// positions are ignored.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            upgradeable: bytes[0] & MASK_UPGRADEABLE != 0,
            readable: bytes[0] & MASK_READABLE != 0,
            payable: bytes[1] & MASK_PAYABLE != 0,
            payable_by_sc: bytes[1] & MASK_PAYABLE_BY_SC != 0,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl Default for CodeMetadata {
    fn default() -> Self {
        Self::new(true, true, false, true)
    }
}

impl fmt::Display for CodeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
