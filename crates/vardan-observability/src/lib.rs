//! Observability for the Vardan storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Component-scoped structured logging
//! - `LogBuilder` - Fluent field attachment for a single entry

mod logging;

pub use logging::*;
