//! Vocabulary and encoding diagnostics.
//!
//! ## Submodules
//!
//! - [`vocab`] — Character-to-code vocabulary built from observed text
//! - [`report`] — Per-pass diagnostics (unmapped characters, dropped words, truncation)

pub mod report;
pub mod vocab;

pub use report::EncodeReport;
pub use vocab::CharMap;
