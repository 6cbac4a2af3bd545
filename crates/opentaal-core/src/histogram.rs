// Histogram reporting over characters and words.
//
// A histogram counts either individual characters or whole values (words,
// lines) and renders the sorted counts as TSV, Markdown or JSON. Character
// histograms include the codepoint and Unicode category per entry.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde_json::json;

use crate::character::{self, CharCategory};

/// Errors from histogram construction and rendering.
#[derive(Debug, thiserror::Error)]
pub enum HistogramError {
    /// Rendering requested while no values have been added.
    #[error("cannot process {desc:?} because no values have been added")]
    Empty { desc: String },

    /// An empty value was added.
    #[error("cannot add an empty value to {desc:?}")]
    EmptyValue { desc: String },

    /// Reading the input file or writing the report failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Rendering options for histogram reports.
#[derive(Debug, Clone, Copy)]
pub struct HistogramFormat {
    /// Include the description line.
    pub desc: bool,
    /// Include the column header (TSV only).
    pub header: bool,
    /// Highest counts first.
    pub reverse: bool,
    /// Include codepoint and category columns (character histograms only).
    pub unicode: bool,
    /// Abbreviate category names to at most seven characters.
    pub abbrev: bool,
}

impl Default for HistogramFormat {
    fn default() -> Self {
        Self {
            desc: true,
            header: true,
            reverse: true,
            unicode: true,
            abbrev: true,
        }
    }
}

/// A histogram over characters or words.
///
/// Counts are kept per unique value; the value set is unbounded, so callers
/// feeding arbitrary input should prefer character mode.
#[derive(Debug, Clone)]
pub struct Histogram {
    desc: String,
    chars: bool,
    data: HashMap<String, u64>,
}

impl Histogram {
    /// Create a character histogram: added values are counted per character.
    pub fn chars(desc: &str) -> Self {
        Self {
            desc: desc.to_owned(),
            chars: true,
            data: HashMap::new(),
        }
    }

    /// Create a word histogram: added values are counted as a whole.
    pub fn words(desc: &str) -> Self {
        Self {
            desc: desc.to_owned(),
            chars: false,
            data: HashMap::new(),
        }
    }

    /// Build a histogram from a text file, one line at a time.
    ///
    /// In character mode every character of every line is counted; in word
    /// mode every non-empty line is counted as one value. Line terminators
    /// are not counted.
    pub fn from_file(desc: &str, path: &Path, chars: bool) -> Result<Self, HistogramError> {
        let mut histogram = if chars {
            Self::chars(desc)
        } else {
            Self::words(desc)
        };
        let file = File::open(path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            if !line.is_empty() {
                histogram.add(&line)?;
            }
        }
        Ok(histogram)
    }

    /// Description this histogram was created with.
    pub fn description(&self) -> &str {
        &self.desc
    }

    /// Add a value, increasing its count by one.
    ///
    /// In character mode all characters of the value are counted
    /// separately. Empty values are rejected.
    pub fn add(&mut self, value: &str) -> Result<(), HistogramError> {
        if value.is_empty() {
            return Err(HistogramError::EmptyValue {
                desc: self.desc.clone(),
            });
        }
        if self.chars {
            for c in value.chars() {
                *self.data.entry(c.to_string()).or_insert(0) += 1;
            }
        } else {
            *self.data.entry(value.to_owned()).or_insert(0) += 1;
        }
        Ok(())
    }

    /// Count for a single value, zero if it was never added.
    pub fn count(&self, value: &str) -> u64 {
        self.data.get(value).copied().unwrap_or(0)
    }

    /// Number of unique values, also known as bins.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no values have been added yet.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Lowest count over all bins, zero when empty.
    pub fn minimum(&self) -> u64 {
        self.data.values().copied().min().unwrap_or(0)
    }

    /// Highest count over all bins, zero when empty.
    pub fn maximum(&self) -> u64 {
        self.data.values().copied().max().unwrap_or(0)
    }

    /// Entries sorted by count, ties broken by value for stable output.
    fn sorted_entries(&self, reverse: bool) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .data
            .iter()
            .map(|(value, &count)| (value.as_str(), count))
            .collect();
        entries.sort_by(|a, b| {
            let by_count = if reverse {
                b.1.cmp(&a.1)
            } else {
                a.1.cmp(&b.1)
            };
            by_count.then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    fn ensure_not_empty(&self) -> Result<(), HistogramError> {
        if self.data.is_empty() {
            return Err(HistogramError::Empty {
                desc: self.desc.clone(),
            });
        }
        Ok(())
    }

    /// Whether the per-character columns apply to this histogram.
    fn char_columns(&self, format: HistogramFormat) -> bool {
        self.chars && format.unicode
    }

    /// Render the sorted counts as a TSV table.
    pub fn to_tsv_string(&self, format: HistogramFormat) -> Result<String, HistogramError> {
        self.ensure_not_empty()?;
        let mut out = String::new();
        if format.desc {
            let _ = writeln!(out, "{}", self.desc);
        }
        if format.header {
            if self.char_columns(format) {
                if format.abbrev {
                    let _ = writeln!(out, "count\tchar.\tcodep.\tcateg.");
                } else {
                    let _ = writeln!(out, "count\tcharacter\tcodepoint\tcategory");
                }
            } else {
                let _ = writeln!(out, "count\tvalue");
            }
        }
        for (value, count) in self.sorted_entries(format.reverse) {
            if self.char_columns(format) {
                if let Some(c) = value.chars().next() {
                    let _ = writeln!(
                        out,
                        "{count:>7}\t{}\t{}\t{}",
                        character::print_friendly(c),
                        character::to_hex(c),
                        CharCategory::of(c).name(format.abbrev),
                    );
                }
            } else {
                let _ = writeln!(
                    out,
                    "{count:>7}\t{}",
                    character::print_friendly_string(value)
                );
            }
        }
        Ok(out)
    }

    /// Render the sorted counts as a Markdown table.
    pub fn to_md_string(&self, format: HistogramFormat) -> Result<String, HistogramError> {
        self.ensure_not_empty()?;
        let mut out = String::new();
        if format.desc {
            let _ = writeln!(out, "{}\n", self.desc);
        }
        if self.char_columns(format) {
            let _ = writeln!(out, "count | character | codepoint | category");
            let _ = writeln!(out, "--: | --- | --: | ---");
        } else {
            let _ = writeln!(out, "count | value");
            let _ = writeln!(out, "--: | ---");
        }
        for (value, count) in self.sorted_entries(format.reverse) {
            if self.char_columns(format) {
                if let Some(c) = value.chars().next() {
                    let _ = writeln!(
                        out,
                        "`{count}` | `{}` | `{}` | {}",
                        character::print_friendly(c),
                        character::to_hex(c),
                        CharCategory::of(c).name(false),
                    );
                }
            } else {
                let _ = writeln!(
                    out,
                    "`{count}` | `{}`",
                    character::print_friendly_string(value)
                );
            }
        }
        Ok(out)
    }

    /// Render the sorted counts as a JSON document.
    pub fn to_json_string(&self, format: HistogramFormat) -> Result<String, HistogramError> {
        self.ensure_not_empty()?;
        let data: Vec<serde_json::Value> = self
            .sorted_entries(format.reverse)
            .into_iter()
            .map(|(value, count)| {
                if self.char_columns(format) {
                    match value.chars().next() {
                        Some(c) => json!({
                            "count": count,
                            "value": character::print_friendly(c).to_string(),
                            "codepoint": character::to_hex(c),
                            "category": CharCategory::of(c).name(false),
                        }),
                        None => json!({ "count": count, "value": value }),
                    }
                } else {
                    json!({
                        "count": count,
                        "value": character::print_friendly_string(value),
                    })
                }
            })
            .collect();
        let mut doc = serde_json::Map::new();
        if format.desc {
            doc.insert("description".into(), json!(self.desc));
        }
        doc.insert("data".into(), json!(data));
        doc.insert("unique".into(), json!(self.len()));
        doc.insert("minimum".into(), json!(self.minimum()));
        doc.insert("maximum".into(), json!(self.maximum()));
        let text = serde_json::to_string_pretty(&serde_json::Value::Object(doc))
            .map_err(io::Error::other)?;
        Ok(text)
    }

    /// Write the TSV report to a file.
    pub fn write_tsv(&self, path: &Path, format: HistogramFormat) -> Result<(), HistogramError> {
        std::fs::write(path, self.to_tsv_string(format)?)?;
        Ok(())
    }

    /// Write the Markdown report to a file.
    pub fn write_md(&self, path: &Path, format: HistogramFormat) -> Result<(), HistogramError> {
        std::fs::write(path, self.to_md_string(format)?)?;
        Ok(())
    }

    /// Write the JSON report to a file.
    pub fn write_json(&self, path: &Path, format: HistogramFormat) -> Result<(), HistogramError> {
        std::fs::write(path, self.to_json_string(format)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_histogram() -> Histogram {
        let mut h = Histogram::chars("letters");
        h.add("aab").unwrap();
        h.add("ab").unwrap();
        h
    }

    #[test]
    fn char_mode_counts_per_character() {
        let h = char_histogram();
        assert_eq!(h.count("a"), 3);
        assert_eq!(h.count("b"), 2);
        assert_eq!(h.count("c"), 0);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn word_mode_counts_whole_values() {
        let mut h = Histogram::words("words");
        h.add("tafel").unwrap();
        h.add("tafel").unwrap();
        h.add("stoel").unwrap();
        assert_eq!(h.count("tafel"), 2);
        assert_eq!(h.count("stoel"), 1);
        assert_eq!(h.count("t"), 0);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn minimum_and_maximum() {
        let h = char_histogram();
        assert_eq!(h.minimum(), 2);
        assert_eq!(h.maximum(), 3);
    }

    #[test]
    fn empty_histogram_min_max_are_zero() {
        let h = Histogram::chars("empty");
        assert_eq!(h.minimum(), 0);
        assert_eq!(h.maximum(), 0);
        assert!(h.is_empty());
    }

    #[test]
    fn adding_empty_value_is_an_error() {
        let mut h = Histogram::words("words");
        assert!(matches!(
            h.add(""),
            Err(HistogramError::EmptyValue { .. })
        ));
    }

    #[test]
    fn rendering_empty_histogram_is_an_error() {
        let h = Histogram::chars("empty");
        let format = HistogramFormat::default();
        assert!(matches!(
            h.to_tsv_string(format),
            Err(HistogramError::Empty { .. })
        ));
        assert!(matches!(
            h.to_md_string(format),
            Err(HistogramError::Empty { .. })
        ));
        assert!(matches!(
            h.to_json_string(format),
            Err(HistogramError::Empty { .. })
        ));
    }

    #[test]
    fn tsv_output_sorted_highest_first() {
        let h = char_histogram();
        let out = h.to_tsv_string(HistogramFormat::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "letters");
        assert_eq!(lines[1], "count\tchar.\tcodep.\tcateg.");
        assert!(lines[2].contains("\ta\tU+0061\tletter"));
        assert!(lines[3].contains("\tb\tU+0062\tletter"));
        assert!(lines[2].trim_start().starts_with('3'));
    }

    #[test]
    fn tsv_output_without_desc_and_header() {
        let h = char_histogram();
        let format = HistogramFormat {
            desc: false,
            header: false,
            ..Default::default()
        };
        let out = h.to_tsv_string(format).unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn tsv_forward_order() {
        let h = char_histogram();
        let format = HistogramFormat {
            desc: false,
            header: false,
            reverse: false,
            ..Default::default()
        };
        let out = h.to_tsv_string(format).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("\tb\t"));
        assert!(lines[1].contains("\ta\t"));
    }

    #[test]
    fn ties_broken_by_value() {
        let mut h = Histogram::chars("ties");
        h.add("ba").unwrap();
        let format = HistogramFormat {
            desc: false,
            header: false,
            ..Default::default()
        };
        let out = h.to_tsv_string(format).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("\ta\t"));
        assert!(lines[1].contains("\tb\t"));
    }

    #[test]
    fn md_output_has_table_header() {
        let h = char_histogram();
        let out = h.to_md_string(HistogramFormat::default()).unwrap();
        assert!(out.contains("count | character | codepoint | category"));
        assert!(out.contains("--: | --- | --: | ---"));
        assert!(out.contains("`3` | `a` | `U+0061` | letter"));
    }

    #[test]
    fn word_histogram_tsv_has_two_columns() {
        let mut h = Histogram::words("words");
        h.add("een twee").unwrap();
        let out = h.to_tsv_string(HistogramFormat::default()).unwrap();
        assert!(out.contains("count\tvalue"));
        assert!(out.contains("een\u{2423}twee"));
    }

    #[test]
    fn json_output_structure() {
        let h = char_histogram();
        let out = h.to_json_string(HistogramFormat::default()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["description"], "letters");
        assert_eq!(doc["unique"], 2);
        assert_eq!(doc["minimum"], 2);
        assert_eq!(doc["maximum"], 3);
        let data = doc["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["count"], 3);
        assert_eq!(data[0]["value"], "a");
        assert_eq!(data[0]["codepoint"], "U+0061");
        assert_eq!(data[0]["category"], "letter");
    }

    #[test]
    fn from_file_counts_lines() {
        let dir = std::env::temp_dir();
        let path = dir.join("opentaal-histogram-test.txt");
        std::fs::write(&path, "aa\nb\n\nb\n").unwrap();

        let h = Histogram::from_file("chars", &path, true).unwrap();
        assert_eq!(h.count("a"), 2);
        assert_eq!(h.count("b"), 2);

        let h = Histogram::from_file("words", &path, false).unwrap();
        assert_eq!(h.count("aa"), 1);
        assert_eq!(h.count("b"), 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn invisible_characters_rendered_print_friendly() {
        let mut h = Histogram::chars("spaces");
        h.add("a b").unwrap();
        let out = h.to_tsv_string(HistogramFormat::default()).unwrap();
        assert!(out.contains("\u{2423}\tU+0020\twhites."));
    }
}
