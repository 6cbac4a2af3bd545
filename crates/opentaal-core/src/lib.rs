// opentaal-core: shared utilities for Dutch text-quality tooling.
//
// Contains the character classifier used by the spell-checking facade,
// histogram reporting over characters and words, and small markup
// builders for HTML and Markdown output.

pub mod character;
pub mod histogram;
pub mod mark;

pub use character::CharCategory;
pub use histogram::{Histogram, HistogramError, HistogramFormat};
