//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - a barcode, a plate, a document
/// number. To "modify" one, construct a new one through its validating
/// constructor; the type never holds a value that failed validation.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
