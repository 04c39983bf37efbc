//! Top-level module for word-sequence generation.
//!
//! The pipeline, from leaf to root:
//! - `Dictionary`: words keyed by their first letter
//! - `selector`: one seeded random draw, optionally constrained to a letter
//! - `sequence`: count-based or initials-based sequence building
//! - `format` / `style`: per-word case transform and separator
//! - `WordGenerator`: owns all of the above plus the seeded generator

/// In-memory word list keyed by starting letter.
///
/// Supports loading from disk or any line source, and offline
/// deduplication/sorting for dictionary maintenance.
pub mod dictionary;

/// Random word selection over a `Dictionary`.
pub mod selector;

/// Selection strategy (`Count` or `Initials`) and precedence rules.
pub mod request;

/// Sequence building: draws words and joins them with single spaces.
pub mod sequence;

/// Word styles and the `(style, separator)` pair used for formatting.
pub mod style;

/// Pure string formatting (case transform + separator).
pub mod format;

/// High-level interface tying the dictionary, the seeded generator
/// and the format specification together.
pub mod generator;
