//! # redacted-langid
//!
//! Lightweight statistical language identification.
//!
//! Builds a ranked character-trigram profile of the input and compares
//! it against static per-language reference profiles with the
//! out-of-place rank distance (Cavnar–Trenkle). The reference tables
//! are compiled in; nothing is loaded at runtime and detection is a
//! pure function of its input.

mod detector;
pub mod profiles;

pub use detector::LanguageDetector;
