//! Shared EC2 detection logic
//!
//! The classifier is pure and operates on plain identifier strings, so it
//! can be exercised without hardware access or network reachability. The
//! orchestrator combines an injected identifier source with the confirmation
//! probe into the final decision.

pub mod ec2;

// Re-export for convenience
pub use ec2::{looks_like_ec2, Ec2Detector};
