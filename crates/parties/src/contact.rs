use serde::{Deserialize, Serialize};

use perumarket_core::{DomainError, DomainResult, ValueObject};

/// A contact email address, validated with the same loose shape check the
/// intake forms apply: some non-whitespace, an `@`, non-whitespace, a dot,
/// non-whitespace. This is an unanchored search, not RFC 5322 parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let address = raw.trim();
        if address.is_empty() {
            return Err(DomainError::validation("email address is required"));
        }
        if !matches_email_shape(address) {
            return Err(DomainError::validation("email address is malformed"));
        }
        Ok(Self(address.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for EmailAddress {}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for EmailAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = DomainError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

// Searches for the pattern: a non-whitespace char, `@`, a non-whitespace run,
// `.`, a non-whitespace char.
fn matches_email_shape(raw: &str) -> bool {
    let chars: Vec<char> = raw.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        for j in (i + 2)..chars.len() {
            if chars[j] == '.'
                && chars[i + 1..j].iter().all(|c| !c.is_whitespace())
                && chars.get(j + 1).is_some_and(|c| !c.is_whitespace())
            {
                return true;
            }
        }
    }
    false
}
