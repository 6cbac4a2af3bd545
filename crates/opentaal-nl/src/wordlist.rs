// Retrieval of the published OpenTaal word lists.
//
// Lists live in the opentaal-wordlist repository and are fetched over
// HTTPS. Downloads are cached on disk under the user configuration
// directory so repeated runs work offline.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::debug;

/// Errors from word list retrieval and parsing.
#[derive(Debug, thiserror::Error)]
pub enum WordlistError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The user configuration directory could not be determined.
    #[error("no configuration directory available")]
    NoConfigDir,

    /// A TSV line without a tab separator.
    #[error("malformed TSV line {0:?}")]
    MalformedTsv(String),
}

/// Path to the `opentaal` configuration directory, created on demand.
pub fn config_path() -> Result<PathBuf, WordlistError> {
    let mut path = dirs::config_dir().ok_or(WordlistError::NoConfigDir)?;
    path.push("opentaal");
    fs::create_dir_all(&path).map_err(|source| WordlistError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

/// Download a text file from an OpenTaal repository on GitHub.
///
/// `filename` may carry a directory prefix inside the repository. With
/// `cache` set, the file is stored under [`config_path`] by its leaf name
/// and served from there on later calls; without it, the file is fetched
/// fresh and the cache is left untouched.
pub fn url_to_string(filename: &str, cache: bool, repository: &str) -> Result<String, WordlistError> {
    let url = format!(
        "https://raw.githubusercontent.com/OpenTaal/opentaal-{repository}/master/{filename}"
    );
    if cache {
        let leaf = filename.rsplit('/').next().unwrap_or(filename);
        let path = config_path()?.join(leaf);
        match fs::read_to_string(&path) {
            Ok(content) => return Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let content = fetch(&url)?;
                fs::write(&path, &content).map_err(|source| WordlistError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                return Ok(content);
            }
            Err(source) => {
                return Err(WordlistError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        }
    }
    fetch(&url)
}

fn fetch(url: &str) -> Result<String, WordlistError> {
    debug!(url, "downloading word list");
    let mut response = ureq::get(url).call().map_err(|source| WordlistError::Http {
        url: url.to_owned(),
        source: Box::new(source),
    })?;
    response
        .body_mut()
        .read_to_string()
        .map_err(|source| WordlistError::Http {
            url: url.to_owned(),
            source: Box::new(source),
        })
}

/// Split a newline-terminated string into its lines, in order.
///
/// The input must end with a newline and contain no empty lines.
pub fn str_to_list(string: &str) -> Vec<String> {
    string
        .strip_suffix('\n')
        .unwrap_or(string)
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Split a newline-terminated string into a set of its lines.
pub fn str_to_set(string: &str) -> HashSet<String> {
    string
        .strip_suffix('\n')
        .unwrap_or(string)
        .split('\n')
        .map(str::to_owned)
        .collect()
}

/// Parse a newline-terminated TSV string into a map from the first column
/// to the rest of each line.
pub fn tsv_to_map(string: &str) -> Result<HashMap<String, String>, WordlistError> {
    let mut map = HashMap::new();
    for line in string.strip_suffix('\n').unwrap_or(string).split('\n') {
        let (word, values) = line
            .split_once('\t')
            .ok_or_else(|| WordlistError::MalformedTsv(line.to_owned()))?;
        map.insert(word.to_owned(), values.to_owned());
    }
    Ok(map)
}

/// Read a file into a set of its trimmed lines.
pub fn file_to_set(path: &str) -> Result<HashSet<String>, WordlistError> {
    let file = fs::File::open(path).map_err(|source| WordlistError::Io {
        path: path.to_owned(),
        source,
    })?;
    let mut set = HashSet::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| WordlistError::Io {
            path: path.to_owned(),
            source,
        })?;
        set.insert(line.trim().to_owned());
    }
    Ok(set)
}

/// Write a set to a file, one item per line, in iteration order.
pub fn set_to_file(data: &HashSet<String>, path: &str) -> Result<(), WordlistError> {
    let mut file = fs::File::create(path).map_err(|source| WordlistError::Io {
        path: path.to_owned(),
        source,
    })?;
    for line in data {
        writeln!(file, "{line}").map_err(|source| WordlistError::Io {
            path: path.to_owned(),
            source,
        })?;
    }
    Ok(())
}

fn wordlist_file(filename: &str, cache: bool) -> Result<String, WordlistError> {
    url_to_string(filename, cache, "wordlist")
}

/// The word parts TSV as a map from word to its parts.
pub fn wordparts(cache: bool) -> Result<HashMap<String, String>, WordlistError> {
    tsv_to_map(&wordlist_file("elements/wordparts.tsv", cache)?)
}

/// The common misspellings TSV as a map from misspelling to corrections.
pub fn corrections(cache: bool) -> Result<HashMap<String, String>, WordlistError> {
    tsv_to_map(&wordlist_file("elements/corrections.tsv", cache)?)
}

/// Words that are exclusively adverbs.
pub fn only_adverbs(cache: bool) -> Result<HashSet<String>, WordlistError> {
    Ok(str_to_set(&wordlist_file(
        "experimenteel/alleen-bijwoorden.txt",
        cache,
    )?))
}

/// The full word list.
pub fn wordlist(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file("wordlist.txt", cache)?))
}

/// Roman numbers.
pub fn roman_numbers(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "elements/romeinse-cijfers.txt",
        cache,
    )?))
}

/// Words spelled entirely in ASCII.
pub fn wordlist_ascii(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "elements/wordlist-ascii.txt",
        cache,
    )?))
}

/// Words with at least one non-ASCII character.
pub fn wordlist_non_ascii(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "elements/wordlist-non-ascii.txt",
        cache,
    )?))
}

/// Plural nouns.
pub fn nouns_plural(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "experimenteel/nouns-meervouden.txt",
        cache,
    )?))
}

/// Adjectives and adverbs.
pub fn adjectives_and_adverbs(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "experimenteel/adjectieven-en-bijwoorden.txt",
        cache,
    )?))
}

/// Verbs in infinitive form.
pub fn verbs_infinitive(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "experimenteel/werkwoorden-infinitief.txt",
        cache,
    )?))
}

/// Certified base words.
pub fn base_words_certified(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "elements/basiswoorden-gekeurd.txt",
        cache,
    )?))
}

/// Uncertified base words.
pub fn base_words_uncertified(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "elements/basiswoorden-ongekeurd.txt",
        cache,
    )?))
}

/// Uncertified flexions.
pub fn flexions_uncertified(cache: bool) -> Result<Vec<String>, WordlistError> {
    Ok(str_to_list(&wordlist_file(
        "elements/flexies-ongekeurd.txt",
        cache,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keeps_order() {
        assert_eq!(
            str_to_list("tafel\nstoel\npoot\n"),
            vec!["tafel", "stoel", "poot"]
        );
    }

    #[test]
    fn list_tolerates_missing_final_newline() {
        assert_eq!(str_to_list("tafel\nstoel"), vec!["tafel", "stoel"]);
    }

    #[test]
    fn set_drops_duplicates() {
        let set = str_to_set("tafel\nstoel\ntafel\n");
        assert_eq!(set, HashSet::from(["tafel".to_owned(), "stoel".to_owned()]));
    }

    #[test]
    fn tsv_splits_on_first_tab_only() {
        let map = tsv_to_map("tafel\tta\tfel\nstoel\tstoel\n").unwrap();
        assert_eq!(map["tafel"], "ta\tfel");
        assert_eq!(map["stoel"], "stoel");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn tsv_without_tab_is_malformed() {
        assert!(matches!(
            tsv_to_map("tafel\n"),
            Err(WordlistError::MalformedTsv(_))
        ));
    }

    #[test]
    fn set_to_file_and_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let path = path.to_str().unwrap();
        let data = HashSet::from(["tafel".to_owned(), "stoel".to_owned()]);
        set_to_file(&data, path).unwrap();
        assert_eq!(file_to_set(path).unwrap(), data);
    }

    #[test]
    fn file_to_set_trims_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "  tafel \nstoel\n").unwrap();
        assert_eq!(
            file_to_set(path.to_str().unwrap()).unwrap(),
            HashSet::from(["tafel".to_owned(), "stoel".to_owned()])
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = file_to_set("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, WordlistError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
