//! Test utilities for shop services.
//!
//! Provides `MockAdmin` and the contract fixture loader.
//! Import in tests only.

pub mod auth;
pub mod fixture;
