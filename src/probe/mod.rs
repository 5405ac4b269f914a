//! Metadata endpoint confirmation probe
//!
//! A local heuristic match is not proof of running on EC2; the authoritative
//! signal is whether the provider-only metadata endpoint answers. This
//! module provides:
//! - **Client** - reqwest-backed transport for the well-known metadata GET
//! - **Prober** - bounded-retry, cancellable confirmation loop
//!
//! The transport sits behind a trait so tests can substitute stub
//! implementations without a live endpoint.

pub mod client;
pub mod prober;

// Re-export main types
pub use client::{MetadataClient, MetadataTransport};
pub use prober::{ConfirmationProber, MAX_ATTEMPTS, RETRY_DELAY};
