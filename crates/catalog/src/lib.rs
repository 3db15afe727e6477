//! Catalog domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). Its centerpiece is
//! the EAN-13 barcode codec used by the product forms: one shared implementation
//! of check-digit computation, validation, and generation, so call sites cannot
//! drift apart.

pub mod barcode;

pub use barcode::{Barcode, BarcodeGenerator, compute_check_digit, is_valid};
