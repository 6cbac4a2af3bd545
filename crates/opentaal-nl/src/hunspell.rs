// Hunspell-backed dictionary engine.
//
// Thin adapter from the Hunspell C library to the `DictionaryEngine`
// boundary. Requires the system Hunspell library at link time, so the
// whole module sits behind the `hunspell` feature.

use std::path::Path;

use hunspell_rs::{CheckResult, Hunspell};

use crate::engine::{AnalysisList, DictionaryEngine, EngineError, SuggestionList};

/// Dictionary engine over the system Hunspell library.
pub struct HunspellEngine {
    inner: Hunspell,
}

impl DictionaryEngine for HunspellEngine {
    fn open(dic_path: &Path, aff_path: &Path) -> Result<Self, EngineError> {
        let aff = path_str(aff_path)?;
        let dic = path_str(dic_path)?;
        Ok(Self {
            inner: Hunspell::new(aff, dic),
        })
    }

    fn spell(&self, word: &str) -> Result<bool, EngineError> {
        Ok(matches!(
            self.inner.check(word),
            CheckResult::FoundInDictionary
        ))
    }

    fn suggest(&self, word: &str) -> Result<SuggestionList, EngineError> {
        Ok(self.inner.suggest(word))
    }

    fn analyze(&self, word: &str) -> Result<AnalysisList, EngineError> {
        Ok(self
            .inner
            .analyze(word)
            .into_iter()
            .map(String::into_bytes)
            .collect())
    }

    fn stem(&self, word: &str) -> Result<AnalysisList, EngineError> {
        Ok(self
            .inner
            .stem(word)
            .into_iter()
            .map(String::into_bytes)
            .collect())
    }
}

/// Hunspell takes C strings, so the paths must be valid UTF-8.
fn path_str(path: &Path) -> Result<&str, EngineError> {
    path.to_str()
        .ok_or_else(|| EngineError::Malformed(format!("non-UTF-8 path {}", path.display())))
}
