// Caching spell-checking facade.
//
// Wraps a dictionary engine behind per-operation memoizing caches and adds
// a space-fallback check policy plus batch helpers over token sequences.
// The underlying dictionary is immutable for the process lifetime, so no
// add or remove operations exist: cached verdicts would go stale.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use once_cell::unsync::OnceCell;
use opentaal_core::CharCategory;
use tracing::debug;

use crate::cache::MemoCache;
use crate::engine::{AnalysisList, DictionaryEngine, EngineError, SuggestionList};

/// Default language code.
pub const DEFAULT_LANG: &str = "nl";

/// Default dictionary directory. Must end in a path separator; file names
/// are derived by concatenation.
pub const DEFAULT_DICT_DIR: &str = "/usr/share/hunspell/";

/// Affix file line marker whose suffix is the dictionary version.
const VERSION_MARKER: &str = "# Date and version: ";

/// Maximum entries per operation cache. Chosen as a power of two greater
/// than the size of the Dutch word list.
const CACHE_CAPACITY: usize = 524_288;

/// Errors from checker construction and operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// A dictionary or affix file is missing or unreadable.
    #[error("cannot load {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The first line of the dictionary file is not a decimal entry count.
    #[error("malformed entry count {line:?} in {path}")]
    EntryCount { path: String, line: String },

    /// The engine failed; surfaced per call, never retried.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Spell checker for one language with memoized engine lookups.
///
/// All four engine operations (check, suggest, analyze, stem) are cached
/// in independent bounded LRU caches owned by this instance, so checkers
/// for different languages never interfere. The dictionary entry count
/// and version string are parsed lazily, at most once.
#[derive(Debug)]
pub struct Checker<E: DictionaryEngine> {
    dic_path: String,
    aff_path: String,
    engine: E,
    entries: OnceCell<usize>,
    version: OnceCell<String>,
    check_cache: RefCell<MemoCache<(String, bool), bool>>,
    suggest_cache: RefCell<MemoCache<String, SuggestionList>>,
    analyze_cache: RefCell<MemoCache<String, AnalysisList>>,
    stem_cache: RefCell<MemoCache<String, AnalysisList>>,
}

impl<E: DictionaryEngine> Checker<E> {
    /// Open a checker for `lang` with dictionaries under `dict_dir`.
    ///
    /// The file paths are derived by concatenation: `{dict_dir}{lang}.dic`
    /// and `{dict_dir}{lang}.aff`. Both files must exist; any failure here
    /// or in the engine leaves no partial checker behind.
    pub fn open(lang: &str, dict_dir: &str) -> Result<Self, CheckerError> {
        let dic_path = format!("{dict_dir}{lang}.dic");
        let aff_path = format!("{dict_dir}{lang}.aff");
        for path in [&dic_path, &aff_path] {
            if let Err(source) = File::open(path) {
                return Err(CheckerError::Load {
                    path: path.clone(),
                    source,
                });
            }
        }
        let engine = E::open(Path::new(&dic_path), Path::new(&aff_path))?;
        debug!(dic = %dic_path, aff = %aff_path, "opened dictionary engine");
        Ok(Self::from_engine(engine, dic_path, aff_path))
    }

    /// Open a checker for Dutch from the default dictionary directory.
    pub fn open_default() -> Result<Self, CheckerError> {
        Self::open(DEFAULT_LANG, DEFAULT_DICT_DIR)
    }

    /// Wrap an already opened engine.
    ///
    /// The paths are only used for the lazy `size()`/`version()` metadata
    /// lookups and for display.
    pub fn from_engine(engine: E, dic_path: String, aff_path: String) -> Self {
        Self {
            dic_path,
            aff_path,
            engine,
            entries: OnceCell::new(),
            version: OnceCell::new(),
            check_cache: RefCell::new(MemoCache::new(CACHE_CAPACITY)),
            suggest_cache: RefCell::new(MemoCache::new(CACHE_CAPACITY)),
            analyze_cache: RefCell::new(MemoCache::new(CACHE_CAPACITY)),
            stem_cache: RefCell::new(MemoCache::new(CACHE_CAPACITY)),
        }
    }

    /// Path of the dictionary file.
    pub fn dic_path(&self) -> &str {
        &self.dic_path
    }

    /// Path of the affix file.
    pub fn aff_path(&self) -> &str {
        &self.aff_path
    }

    /// Replace the four operation caches with empty ones of `capacity`
    /// entries each. All cached results are discarded.
    pub fn set_cache_capacity(&mut self, capacity: usize) {
        debug!(capacity, "resetting checker caches");
        self.check_cache = RefCell::new(MemoCache::new(capacity));
        self.suggest_cache = RefCell::new(MemoCache::new(capacity));
        self.analyze_cache = RefCell::new(MemoCache::new(capacity));
        self.stem_cache = RefCell::new(MemoCache::new(capacity));
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Number of entries in the dictionary file.
    ///
    /// Parsed once from the integer header on the first line; later calls
    /// return the cached value without touching the file.
    pub fn size(&self) -> Result<usize, CheckerError> {
        self.entries
            .get_or_try_init(|| {
                let file = File::open(&self.dic_path).map_err(|source| CheckerError::Load {
                    path: self.dic_path.clone(),
                    source,
                })?;
                let mut first = String::new();
                BufReader::new(file)
                    .read_line(&mut first)
                    .map_err(|source| CheckerError::Load {
                        path: self.dic_path.clone(),
                        source,
                    })?;
                let line = first.trim();
                line.parse().map_err(|_| CheckerError::EntryCount {
                    path: self.dic_path.clone(),
                    line: line.to_owned(),
                })
            })
            .copied()
    }

    /// Version string of the affix file.
    ///
    /// Scanned once: the suffix of the first line starting with
    /// `"# Date and version: "`, or the empty string if no such line
    /// exists. Either outcome is cached; the file is not re-scanned.
    pub fn version(&self) -> Result<&str, CheckerError> {
        self.version
            .get_or_try_init(|| {
                let file = File::open(&self.aff_path).map_err(|source| CheckerError::Load {
                    path: self.aff_path.clone(),
                    source,
                })?;
                for line in BufReader::new(file).lines() {
                    let line = line.map_err(|source| CheckerError::Load {
                        path: self.aff_path.clone(),
                        source,
                    })?;
                    if let Some(rest) = line.trim().strip_prefix(VERSION_MARKER) {
                        return Ok(rest.to_owned());
                    }
                }
                Ok(String::new())
            })
            .map(String::as_str)
    }

    // =========================================================================
    // Checking
    // =========================================================================

    /// Whether the word is correctly spelled according to the engine.
    pub fn check(&self, word: &str) -> Result<bool, CheckerError> {
        self.check_cached(word, false)
    }

    /// Like [`check`](Self::check), but a word the engine rejects is still
    /// accepted when it contains spaces and every non-empty space-separated
    /// term individually passes the engine check.
    ///
    /// Cached independently from the plain check for the same word.
    pub fn check_with_space_fallback(&self, word: &str) -> Result<bool, CheckerError> {
        self.check_cached(word, true)
    }

    fn check_cached(&self, word: &str, space_fallback: bool) -> Result<bool, CheckerError> {
        let key = (word.to_owned(), space_fallback);
        if let Some(&verdict) = self.check_cache.borrow_mut().get(&key) {
            return Ok(verdict);
        }
        let mut verdict = self.engine.spell(word)?;
        if !verdict && space_fallback && word.contains(' ') {
            verdict = self.check_split_terms(word)?;
        }
        self.check_cache.borrow_mut().put(key, verdict);
        Ok(verdict)
    }

    /// All non-empty space-separated terms pass the engine check. Empty
    /// terms from consecutive spaces are skipped; the first failing term
    /// settles the verdict.
    fn check_split_terms(&self, word: &str) -> Result<bool, EngineError> {
        for term in word.split(' ') {
            if !term.is_empty() && !self.engine.spell(term)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Suggestions for the word, correct or not. Memoized.
    pub fn suggest(&self, word: &str) -> Result<SuggestionList, CheckerError> {
        if let Some(cached) = self.suggest_cache.borrow_mut().get(word) {
            return Ok(cached.clone());
        }
        let suggestions = self.engine.suggest(word)?;
        self.suggest_cache
            .borrow_mut()
            .put(word.to_owned(), suggestions.clone());
        Ok(suggestions)
    }

    /// Morphological analysis of the word. Memoized.
    pub fn analyze(&self, word: &str) -> Result<AnalysisList, CheckerError> {
        if let Some(cached) = self.analyze_cache.borrow_mut().get(word) {
            return Ok(cached.clone());
        }
        let analysis = self.engine.analyze(word)?;
        self.analyze_cache
            .borrow_mut()
            .put(word.to_owned(), analysis.clone());
        Ok(analysis)
    }

    /// Stems of the word. Memoized.
    pub fn stem(&self, word: &str) -> Result<AnalysisList, CheckerError> {
        if let Some(cached) = self.stem_cache.borrow_mut().get(word) {
            return Ok(cached.clone());
        }
        let stems = self.engine.stem(word)?;
        self.stem_cache
            .borrow_mut()
            .put(word.to_owned(), stems.clone());
        Ok(stems)
    }

    // =========================================================================
    // Batch helpers
    // =========================================================================

    /// Check a sequence of tokens, one verdict per token in input order.
    ///
    /// A token of exactly one character that is not a letter (punctuation,
    /// digits, symbols) is accepted without consulting the engine or the
    /// cache. All other tokens go through [`check`](Self::check). The first
    /// engine error aborts the whole batch.
    pub fn check_list<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<bool>, CheckerError> {
        let mut verdicts = Vec::with_capacity(tokens.len());
        for token in tokens {
            let token = token.as_ref();
            if is_single_non_letter(token) {
                verdicts.push(true);
            } else {
                verdicts.push(self.check(token)?);
            }
        }
        Ok(verdicts)
    }

    /// Check a sequence of tokens, returning the zero-based positions that
    /// fail.
    ///
    /// Same policy as [`check_list`](Self::check_list): single non-letter
    /// characters are never failures.
    pub fn check_list_indices<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<HashSet<usize>, CheckerError> {
        let mut failed = HashSet::new();
        for (index, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            if is_single_non_letter(token) {
                continue;
            }
            if !self.check(token)? {
                failed.insert(index);
            }
        }
        Ok(failed)
    }
}

impl<E: DictionaryEngine> fmt::Display for Checker<E> {
    /// The paths of the dictionary and affix files.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dic_path, self.aff_path)
    }
}

/// Whether the token is exactly one character that is not a letter.
fn is_single_non_letter(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !CharCategory::of(c).is_letter(),
        _ => false,
    }
}
