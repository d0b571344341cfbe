use primitive_types::U256;
use serde::{Deserialize, Serialize};

// Separator inside token identifiers: TICKER-RANDOM[-NONCE]
const IDENTIFIER_SEPARATOR: char = '-';

/// A token descriptor: base identifier plus the instance nonce.
/// Fungible tokens carry nonce 0; NFT/SFT instances carry the nonce of the
/// specific unit.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Token {
    identifier: String,
    nonce: u64,
}

impl Token {
    pub fn new(identifier: impl Into<String>, nonce: u64) -> Self {
        Self {
            identifier: identifier.into(),
            nonce,
        }
    }

    pub fn fungible(identifier: impl Into<String>) -> Self {
        Self::new(identifier, 0)
    }

    /// Build a token from an extended identifier (TICKER-RANDOM-NONCE,
    /// nonce in hex). Plain identifiers yield nonce 0.
    pub fn from_extended(extended: &str) -> Self {
        match TokenComputer::extract_nonce_from_extended(extended) {
            Some(nonce) => Self::new(
                TokenComputer::extract_identifier_from_extended(extended),
                nonce,
            ),
            None => Self::fungible(extended),
        }
    }

    pub fn get_identifier(&self) -> &str {
        &self.identifier
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }
}

/// A token paired with the amount to move: a fungible quantity, or the
/// NFT/SFT unit count (normally 1).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenTransfer {
    token: Token,
    amount: U256,
}

impl TokenTransfer {
    pub fn new(token: Token, amount: U256) -> Self {
        Self { token, amount }
    }

    pub fn get_token(&self) -> &Token {
        &self.token
    }

    pub fn get_amount(&self) -> U256 {
        self.amount
    }
}

/// Classification rules over token descriptors.
pub struct TokenComputer;

impl TokenComputer {
    /// A token is fungible iff it carries no nonce, neither as a field nor
    /// as a trailing identifier segment.
    pub fn is_fungible(token: &Token) -> bool {
        token.nonce == 0 && Self::extract_nonce_from_extended(&token.identifier).is_none()
    }

    /// Nonce of an extended identifier, None when the identifier has no
    /// trailing nonce segment. Identifiers are assumed pre-validated.
    pub fn extract_nonce_from_extended(extended: &str) -> Option<u64> {
        let parts: Vec<&str> = extended.split(IDENTIFIER_SEPARATOR).collect();
        match parts.as_slice() {
            [_, _, nonce] => u64::from_str_radix(nonce, 16).ok(),
            _ => None,
        }
    }

    /// Base identifier of an extended identifier (the nonce segment
    /// stripped). Plain identifiers come back unchanged.
    pub fn extract_identifier_from_extended(extended: &str) -> String {
        let parts: Vec<&str> = extended.split(IDENTIFIER_SEPARATOR).collect();
        match parts.as_slice() {
            [ticker, random, _] => format!("{ticker}{IDENTIFIER_SEPARATOR}{random}"),
            _ => extended.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fungible_classification() {
        assert!(TokenComputer::is_fungible(&Token::fungible("USDC-abc123")));
        assert!(!TokenComputer::is_fungible(&Token::new("MYNFT-ab12", 7)));
        // extended identifier with an explicit nonce segment
        assert!(!TokenComputer::is_fungible(&Token::new("MYNFT-ab12-01", 0)));
    }

    #[test]
    fn test_from_extended() {
        let token = Token::from_extended("MYNFT-ab12-01");
        assert_eq!(token.get_identifier(), "MYNFT-ab12");
        assert_eq!(token.get_nonce(), 1);

        let token = Token::from_extended("MYNFT-ab12-0a");
        assert_eq!(token.get_nonce(), 10);

        let token = Token::from_extended("USDC-abc123");
        assert_eq!(token.get_identifier(), "USDC-abc123");
        assert_eq!(token.get_nonce(), 0);
    }
}
