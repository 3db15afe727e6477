//! Parties domain module.
//!
//! This crate contains business rules shared by clients, employees, and system
//! users, implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): identity document numbers and contact details, validated once at
//! the boundary instead of ad hoc in every form.

pub mod contact;
pub mod document;

pub use contact::EmailAddress;
pub use document::{DocumentKind, DocumentNumber};
