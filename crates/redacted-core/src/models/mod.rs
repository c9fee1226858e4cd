pub mod language;
pub mod manifest;
pub mod span;

pub use language::Language;
pub use manifest::{DiscoveryManifest, ManifestFlags};
pub use span::{EntityKind, Span};
