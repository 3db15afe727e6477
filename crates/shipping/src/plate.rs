use serde::{Deserialize, Serialize};

use perumarket_core::{DomainError, DomainResult, ValueObject};

const MIN_LEN: usize = 6;
const MAX_LEN: usize = 10;

/// A vehicle license plate, stored normalized to uppercase.
///
/// Accepted format is 6 to 10 characters from `A-Z` and `0-9` after trimming
/// and uppercasing, the rule applied at vehicle registration. Uniqueness
/// against the registered fleet is a backend concern and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let plate = raw.trim().to_uppercase();
        if plate.is_empty() {
            return Err(DomainError::validation("plate is required"));
        }
        if plate.len() < MIN_LEN
            || plate.len() > MAX_LEN
            || !plate.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(DomainError::validation(
                "plate must be 6 to 10 letters or digits",
            ));
        }
        Ok(Self(plate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Plate {}

impl core::fmt::Display for Plate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for Plate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Plate {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}
