//! Domain types shared across shop services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers.

pub mod email;
pub mod id;
