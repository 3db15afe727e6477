use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use perumarket_core::{DomainError, DomainResult, ValueObject};

/// Total length of an EAN-13 code: 12 payload digits plus the check digit.
pub const CODE_LEN: usize = 13;

/// Length of the payload preceding the check digit.
pub const PAYLOAD_LEN: usize = 12;

// Payload range for generated codes. The lower bound keeps the first digit
// nonzero, so the decimal rendering is always exactly 12 characters.
const PAYLOAD_MIN: u64 = 100_000_000_000;
const PAYLOAD_MAX: u64 = 999_999_999_999;

/// A validated EAN-13 barcode.
///
/// Invariant: the inner string is exactly 13 ASCII decimal digits and its
/// 13th digit equals the check digit computed over the first 12. Both
/// constructors ([`Barcode::parse`] and [`BarcodeGenerator::generate`])
/// enforce this, so holding a `Barcode` means the code checks out.
///
/// Serializes as a plain string, since product records embed the code as an
/// ordinary text field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Parse and validate a 13-digit code, e.g. one hand-typed into a form.
    ///
    /// Fails with [`DomainError::Validation`] when the input is not exactly
    /// 13 ASCII decimal digits or the check digit does not match the payload.
    pub fn parse(code: &str) -> DomainResult<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != CODE_LEN || !bytes.iter().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(
                "barcode must be exactly 13 decimal digits",
            ));
        }
        if bytes[PAYLOAD_LEN] - b'0' != weighted_check_digit(&bytes[..PAYLOAD_LEN]) {
            return Err(DomainError::validation(
                "barcode check digit does not match payload",
            ));
        }
        Ok(Self(code.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The first 12 digits.
    pub fn payload(&self) -> &str {
        &self.0[..PAYLOAD_LEN]
    }

    /// The 13th digit.
    pub fn check_digit(&self) -> char {
        char::from(self.0.as_bytes()[PAYLOAD_LEN])
    }
}

impl ValueObject for Barcode {}

impl core::fmt::Display for Barcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for Barcode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Barcode {
    type Error = DomainError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::parse(&code)
    }
}

impl From<Barcode> for String {
    fn from(barcode: Barcode) -> Self {
        barcode.0
    }
}

/// Compute the EAN-13 check digit for a 12-digit payload.
///
/// Fails with [`DomainError::InvalidArgument`] unless `payload` is exactly
/// 12 ASCII decimal digits. Deterministic and total over well-formed input.
pub fn compute_check_digit(payload: &str) -> DomainResult<char> {
    let bytes = payload.as_bytes();
    if bytes.len() != PAYLOAD_LEN || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_argument(
            "payload must be exactly 12 decimal digits",
        ));
    }
    Ok(char::from(b'0' + weighted_check_digit(bytes)))
}

/// Check whether `code` is a well-formed EAN-13 code with a correct check digit.
///
/// Safe on arbitrary untrusted input: anything that is not exactly 13 ASCII
/// decimal digits is reported as `false`, never as an error.
pub fn is_valid(code: &str) -> bool {
    let bytes = code.as_bytes();
    if bytes.len() != CODE_LEN || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    bytes[PAYLOAD_LEN] - b'0' == weighted_check_digit(&bytes[..PAYLOAD_LEN])
}

// Standard EAN-13 weighting over 12 payload digits: weight 1 at even
// 0-based positions, 3 at odd ones. Callers guarantee `digits` holds only
// ASCII decimal digits.
fn weighted_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, b)| u32::from(b - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Barcode generator with an injectable randomness source.
///
/// Generated codes are syntactically valid EAN-13 values; the payload is
/// drawn uniformly from `[100_000_000_000, 999_999_999_999]`. Not
/// cryptographically secure, and no uniqueness check against the product
/// catalog is performed.
#[derive(Debug, Clone)]
pub struct BarcodeGenerator<R> {
    rng: R,
}

impl BarcodeGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for BarcodeGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BarcodeGenerator<R> {
    /// Build a generator over a caller-supplied RNG (e.g. a seeded `StdRng`
    /// in tests).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a fresh 13-digit barcode. Infallible.
    pub fn generate(&mut self) -> Barcode {
        let payload = self.rng.gen_range(PAYLOAD_MIN..=PAYLOAD_MAX);
        let mut code = payload.to_string();
        code.push(char::from(b'0' + weighted_check_digit(code.as_bytes())));
        tracing::debug!(barcode = %code, "generated barcode");
        Barcode(code)
    }
}
