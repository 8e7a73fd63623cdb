use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized postal-code cache key.
///
/// Construction trims surrounding whitespace and uppercases the input;
/// blank input is rejected. The format is not restricted to US ZIP codes:
/// geocoding providers return arbitrary postal codes and the cache has no
/// authority over their shape. Callers can check [`is_us_format`] to decide
/// whether a key deserves a warning.
///
/// [`is_us_format`]: PostalCode::is_us_format
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostalCode(String);

impl PostalCode {
    /// Normalize a raw postal code into a cache key.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::InvalidPostalCode(
                "postal code cannot be blank".to_string(),
            ));
        }
        Ok(Self(normalized))
    }

    /// Whether the key matches the US `NNNNN` or `NNNNN-NNNN` shape.
    pub fn is_us_format(&self) -> bool {
        let bytes = self.0.as_bytes();
        match bytes.len() {
            5 => bytes.iter().all(|b| b.is_ascii_digit()),
            10 => {
                bytes[..5].iter().all(|b| b.is_ascii_digit())
                    && bytes[5] == b'-'
                    && bytes[6..].iter().all(|b| b.is_ascii_digit())
            }
            _ => false,
        }
    }

    /// Key under which a forecast for this postal code lives in the
    /// backing store.
    pub fn store_key(&self) -> String {
        format!("forecast:{}", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
