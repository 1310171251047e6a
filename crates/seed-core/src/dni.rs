//! The 8-digit identifier shared by patients and doctors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest valid identifier.
pub const DNI_MIN: u32 = 10_000_000;

/// Largest valid identifier.
pub const DNI_MAX: u32 = 99_999_999;

/// Errors produced when constructing a [`Dni`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DniError {
    /// Number outside `DNI_MIN..=DNI_MAX`.
    #[error("identifier {0} is outside {DNI_MIN}..={DNI_MAX}")]
    OutOfRange(u64),

    /// String that is not exactly eight ASCII digits.
    #[error("identifier '{0}' is not an 8-digit number")]
    Malformed(String),
}

/// An 8-digit numeric identifier, stored as its decimal string.
///
/// The leading digit is never zero, so the string form always has exactly
/// eight characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dni(String);

impl Dni {
    /// Build an identifier from its numeric value.
    pub fn from_number(value: u64) -> Result<Self, DniError> {
        if !(DNI_MIN as u64..=DNI_MAX as u64).contains(&value) {
            return Err(DniError::OutOfRange(value));
        }
        Ok(Self(value.to_string()))
    }

    /// Borrow the string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier.
    pub fn as_number(&self) -> u32 {
        // Validated on construction.
        self.0.parse().unwrap_or_default()
    }
}

impl FromStr for Dni {
    type Err = DniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) || s.starts_with('0') {
            return Err(DniError::Malformed(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Dni {
    type Error = DniError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dni> for String {
    fn from(dni: Dni) -> Self {
        dni.0
    }
}

impl AsRef<str> for Dni {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
