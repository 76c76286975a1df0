//! HTTP service plumbing shared by shop services.

pub mod config;
pub mod middleware;
pub mod serde;
pub mod tracing;
