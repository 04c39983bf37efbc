//! Random word-sequence generation library.
//!
//! This crate provides everything needed to turn a flat word list into
//! human-readable names such as `brave-cannon` or `QuietHarbor`:
//! - Dictionary loading, keyed by starting letter
//! - Seeded random word selection, optionally constrained to a letter
//! - Count-based and initials-based sequence building
//! - Per-word styling and custom separators
//!
//! Low-level file helpers are kept internal.

/// Dictionary, selection, sequence building, styling and the
/// high-level `WordGenerator`.
pub mod model;

/// Error type shared by every operation of the crate.
pub mod error;

/// Serializable generator defaults (dictionary, style, separator, count, seed).
pub mod config;

/// I/O utilities (file loading and rewriting).
///
/// Not exposed
pub(crate) mod io;

pub use error::{Result, WordsError};
pub use model::dictionary::{CleanReport, Dictionary};
pub use model::generator::{Seed, WordGenerator};
pub use model::request::SelectionRequest;
pub use model::style::{FormatSpec, WordStyle};
