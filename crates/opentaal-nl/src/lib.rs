// opentaal-nl: Dutch language module.
//
// The heart of this crate is the caching spell-checking facade in
// `checker`, layered over the opaque dictionary engine boundary in
// `engine`. The remaining modules are corpus utilities: wordlist
// retrieval and HTML-to-text extraction.

pub mod cache;
pub mod checker;
pub mod engine;

#[cfg(feature = "extract")]
pub mod extractor;
#[cfg(feature = "hunspell")]
pub mod hunspell;
#[cfg(feature = "wordlist")]
pub mod wordlist;

pub use checker::{Checker, CheckerError};
pub use engine::{AnalysisList, DictionaryEngine, EngineError, SuggestionList};

#[cfg(feature = "extract")]
pub use extractor::{ExtractError, Extractor};
#[cfg(feature = "hunspell")]
pub use hunspell::HunspellEngine;
#[cfg(feature = "wordlist")]
pub use wordlist::WordlistError;
