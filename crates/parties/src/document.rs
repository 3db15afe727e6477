use serde::{Deserialize, Serialize};

use perumarket_core::{DomainError, DomainResult, ValueObject};

/// Identity document kinds accepted for clients, employees, and users.
///
/// Serialized tokens match the registration forms' wire values: `DNI`,
/// `PASAPORTE`, `CE`, `RUC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    /// Peruvian national identity document.
    Dni,
    /// Passport.
    #[serde(rename = "PASAPORTE")]
    Passport,
    /// Foreigner's card ("Carné de Extranjería").
    #[serde(rename = "CE")]
    ForeignerCard,
    /// Tax registration number.
    Ruc,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Dni => "DNI",
            DocumentKind::Passport => "PASAPORTE",
            DocumentKind::ForeignerCard => "CE",
            DocumentKind::Ruc => "RUC",
        }
    }
}

impl core::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated identity document number.
///
/// The number is digits-only for every document kind, matching the intake
/// rule of the registration forms. Uniqueness against already-registered
/// parties is a backend concern and is not checked here.
///
/// Serializes as a struct of its parts, since party records carry the kind
/// and the number as separate fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentNumber {
    kind: DocumentKind,
    number: String,
}

impl DocumentNumber {
    /// Validate a document number as typed into a form.
    ///
    /// Trims surrounding whitespace, rejects empty input and any character
    /// that is not an ASCII decimal digit.
    pub fn parse(kind: DocumentKind, raw: &str) -> DomainResult<Self> {
        let number = raw.trim();
        if number.is_empty() {
            return Err(DomainError::validation("document number is required"));
        }
        if !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(
                "document number must contain only digits",
            ));
        }
        Ok(Self {
            kind,
            number: number.to_owned(),
        })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl ValueObject for DocumentNumber {}

impl core::fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.kind, self.number)
    }
}
