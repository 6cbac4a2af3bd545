// Extraction of checkable text from HTML pages.
//
// Converts downloaded pages to plain text so their words can be fed to
// the checker. Built for bulk corpus runs: each HTML file gets a sibling
// text file, and files already extracted are skipped unless overriding
// is enabled.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use html_to_markdown_rs::convert;
use tracing::debug;

/// Errors from text extraction.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot convert HTML: {0}")]
    Convert(String),
}

/// Extracts paragraphs of text from HTML files.
pub struct Extractor {
    override_existing: bool,
}

impl Extractor {
    /// With `override_existing` set, existing output files are rewritten
    /// instead of skipped.
    pub fn new(override_existing: bool) -> Self {
        Self { override_existing }
    }

    pub fn set_override(&mut self, override_existing: bool) {
        self.override_existing = override_existing;
    }

    /// Convert an HTML fragment or page to plain text.
    pub fn extract_str(&self, html: &str) -> Result<String, ExtractError> {
        convert(html, None).map_err(|err| ExtractError::Convert(err.to_string()))
    }

    /// Extract the text of an HTML file into a sibling `.txt` file.
    ///
    /// Returns whether text was extracted. Without overriding, an existing
    /// output file is left alone and `false` is returned. A file that is
    /// not valid UTF-8 or carries no HTML doctype gets an output file with
    /// a single newline, also returning `false`, so reruns skip it.
    pub fn extract_file(&self, path: &Path) -> Result<bool, ExtractError> {
        let out = path.with_extension("txt");
        if !self.override_existing && out.exists() {
            debug!(path = %out.display(), "output exists, skipping");
            return Ok(false);
        }
        let bytes = fs::read(path).map_err(|source| ExtractError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let html = match String::from_utf8(bytes) {
            Ok(html) => html,
            Err(_) => {
                write_out(&out, "\n")?;
                return Ok(false);
            }
        };
        let html = html.trim();
        if !has_html_doctype(html) {
            write_out(&out, "\n")?;
            return Ok(false);
        }
        let text = self.extract_str(html)?;
        write_out(&out, &text)?;
        Ok(true)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(false)
    }
}

fn write_out(path: &PathBuf, content: &str) -> Result<(), ExtractError> {
    fs::write(path, content).map_err(|source| ExtractError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// The page declares an HTML doctype, in any letter case.
fn has_html_doctype(html: &str) -> bool {
    html.to_lowercase().contains("<!doctype html")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "<!DOCTYPE html>\n<html><body><p>De tafel heeft \
                        vier poten.</p></body></html>\n";

    #[test]
    fn extracts_paragraph_text() {
        let extractor = Extractor::default();
        let text = extractor.extract_str(PAGE).unwrap();
        assert!(text.contains("De tafel heeft vier poten."));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn file_gets_txt_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("page.html");
        fs::write(&html, PAGE).unwrap();

        let extractor = Extractor::default();
        assert!(extractor.extract_file(&html).unwrap());
        let text = fs::read_to_string(dir.path().join("page.txt")).unwrap();
        assert!(text.contains("De tafel heeft vier poten."));
    }

    #[test]
    fn existing_output_is_skipped_without_override() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("page.html");
        let txt = dir.path().join("page.txt");
        fs::write(&html, PAGE).unwrap();
        fs::write(&txt, "previous run\n").unwrap();

        let extractor = Extractor::default();
        assert!(!extractor.extract_file(&html).unwrap());
        assert_eq!(fs::read_to_string(&txt).unwrap(), "previous run\n");
    }

    #[test]
    fn override_rewrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("page.html");
        let txt = dir.path().join("page.txt");
        fs::write(&html, PAGE).unwrap();
        fs::write(&txt, "previous run\n").unwrap();

        let extractor = Extractor::new(true);
        assert!(extractor.extract_file(&html).unwrap());
        assert_ne!(fs::read_to_string(&txt).unwrap(), "previous run\n");
    }

    #[test]
    fn missing_doctype_writes_empty_marker() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("fragment.html");
        fs::write(&html, "<p>geen doctype</p>").unwrap();

        let extractor = Extractor::default();
        assert!(!extractor.extract_file(&html).unwrap());
        assert_eq!(
            fs::read_to_string(dir.path().join("fragment.txt")).unwrap(),
            "\n"
        );
    }

    #[test]
    fn doctype_check_ignores_case() {
        assert!(has_html_doctype("<!DOCTYPE HTML>"));
        assert!(has_html_doctype("<!doctype html>"));
        assert!(has_html_doctype("<!DocType Html>"));
        assert!(!has_html_doctype("<html></html>"));
    }

    #[test]
    fn invalid_utf8_writes_empty_marker() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("broken.html");
        fs::write(&html, [0x3c, 0xff, 0xfe, 0x3e]).unwrap();

        let extractor = Extractor::default();
        assert!(!extractor.extract_file(&html).unwrap());
        assert_eq!(
            fs::read_to_string(dir.path().join("broken.txt")).unwrap(),
            "\n"
        );
    }

    #[test]
    fn missing_input_is_an_error() {
        let extractor = Extractor::default();
        assert!(matches!(
            extractor.extract_file(Path::new("/nonexistent/page.html")),
            Err(ExtractError::Io { .. })
        ));
    }
}
