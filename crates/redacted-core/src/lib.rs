//! # redacted-core
//!
//! Foundation crate for the redacted text service.
//! Defines all types, traits, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{RedactedError, RedactedResult};
pub use models::{DiscoveryManifest, EntityKind, Language, Span};
