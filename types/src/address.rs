//! Account address type with `0x` prefix.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An account address: `0x` followed by 40 hex digits.
///
/// Employers, employees, and the custody accounts of the registry and the
/// verification ledger all share this one address space.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// The standard prefix for all addresses.
    pub const PREFIX: &'static str = "0x";

    /// Number of hex digits after the prefix.
    pub const HEX_LEN: usize = 40;

    /// Parse and fully validate an address.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        let candidate = Self(raw.to_ascii_lowercase());
        if candidate.is_valid() {
            Ok(candidate)
        } else {
            Err(TypesError::InvalidAddress(raw.to_string()))
        }
    }

    /// Build the address whose numeric value is `n` (zero-padded).
    pub fn from_u64(n: u64) -> Self {
        Self(format!("0x{n:040x}"))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        match self.0.strip_prefix(Self::PREFIX) {
            Some(digits) => {
                digits.len() == Self::HEX_LEN && digits.bytes().all(|b| b.is_ascii_hexdigit())
            }
            None => false,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Address {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}
