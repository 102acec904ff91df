//! Shared probe plumbing for Vigil services.

pub mod health;
pub mod middleware;
pub mod tracing;
