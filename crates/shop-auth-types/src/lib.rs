//! Auth types shared across shop services.
//!
//! Provides the `AdminOnly` static-secret extractor.

pub mod admin;
