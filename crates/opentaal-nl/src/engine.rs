// Dictionary engine boundary.
//
// The checker does not implement spell checking itself; it consults an
// affix+dictionary engine loaded from a `.dic`/`.aff` file pair. The
// engine is opaque: only the spell / suggest / analyze / stem primitives
// are consumed, and no word may ever be added or removed through it
// (the checker memoizes results for its whole lifetime).

use std::path::Path;

/// Ordered candidate replacements for a word. May be empty; the order is
/// engine-defined.
pub type SuggestionList = Vec<String>;

/// Morphological analysis or stemming output: opaque engine-defined
/// byte-strings, one per reading.
pub type AnalysisList = Vec<Vec<u8>>;

/// Errors from the dictionary engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A dictionary or affix file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary or affix data could not be interpreted.
    #[error("malformed dictionary data: {0}")]
    Malformed(String),

    /// Any other failure reported by the engine backend.
    #[error("{0}")]
    Backend(String),
}

/// An affix+dictionary spell-checking engine for one language.
///
/// Implementations are immutable after `open`: the same word always gets
/// the same verdict for the lifetime of the engine. The checker relies on
/// that to memoize results indefinitely.
pub trait DictionaryEngine: Sized {
    /// Open the engine from a dictionary file and an affix file.
    fn open(dic_path: &Path, aff_path: &Path) -> Result<Self, EngineError>;

    /// Whether the word is correctly spelled.
    fn spell(&self, word: &str) -> Result<bool, EngineError>;

    /// Candidate replacements for the word, correct or not.
    fn suggest(&self, word: &str) -> Result<SuggestionList, EngineError>;

    /// Morphological analysis of the word.
    fn analyze(&self, word: &str) -> Result<AnalysisList, EngineError>;

    /// Stems of the word.
    fn stem(&self, word: &str) -> Result<AnalysisList, EngineError>;
}
