//! Shipping domain module.
//!
//! This crate contains business rules for shipments and fleet vehicles,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod plate;

pub use plate::Plate;
