// Character classification and print-friendly rendering.
//
// The spell-checking facade uses the classifier to recognize one-character
// tokens that are not letters (punctuation, digits, symbols) so they are
// never reported as spelling errors. The histogram module uses the category
// names and the print-friendly forms for its report columns.

/// Coarse Unicode category of a single character.
///
/// The variants follow the top-level Unicode general categories
/// (C, L, M, N, P, S, Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharCategory {
    /// Control characters (general category C).
    Control,
    /// Letters (general category L).
    Letter,
    /// Combining marks (general category M).
    Mark,
    /// Numbers (general category N).
    Number,
    /// Punctuation (general category P).
    Punctuation,
    /// Symbols (general category S).
    Symbol,
    /// Separators and other whitespace (general category Z).
    Whitespace,
}

impl CharCategory {
    /// Classify a character.
    ///
    /// Whitespace is tested before control characters so that tab, newline
    /// and carriage return land in `Whitespace` rather than `Control`.
    pub fn of(c: char) -> CharCategory {
        if c.is_whitespace() {
            return CharCategory::Whitespace;
        }
        if c.is_control() {
            return CharCategory::Control;
        }
        if is_combining_mark(c) {
            return CharCategory::Mark;
        }
        if c.is_alphabetic() {
            return CharCategory::Letter;
        }
        if c.is_numeric() {
            return CharCategory::Number;
        }
        if is_punctuation_char(c) {
            return CharCategory::Punctuation;
        }
        CharCategory::Symbol
    }

    /// Whether this category is a letter category.
    pub fn is_letter(self) -> bool {
        self == CharCategory::Letter
    }

    /// Human-readable category name for report columns.
    ///
    /// With `abbrev` the name fits in seven characters or less.
    pub fn name(self, abbrev: bool) -> &'static str {
        match self {
            CharCategory::Control => "control",
            CharCategory::Letter => "letter",
            CharCategory::Mark => "mark",
            CharCategory::Number => "number",
            CharCategory::Punctuation => {
                if abbrev {
                    "punct."
                } else {
                    "punctuation"
                }
            }
            CharCategory::Symbol => "symbol",
            CharCategory::Whitespace => {
                if abbrev {
                    "whites."
                } else {
                    "whitespace"
                }
            }
        }
    }
}

/// Check whether a character is a combining mark.
fn is_combining_mark(c: char) -> bool {
    let cp = c as u32;
    (0x0300..=0x036F).contains(&cp)      // Combining Diacritical Marks
        || (0x1AB0..=0x1AFF).contains(&cp) // Combining Diacritical Marks Extended
        || (0x20D0..=0x20FF).contains(&cp) // Combining Marks for Symbols
        || (0xFE20..=0xFE2F).contains(&cp) // Combining Half Marks
}

/// Check whether a character is a punctuation character.
fn is_punctuation_char(c: char) -> bool {
    if c.is_ascii_punctuation() {
        // ASCII punctuation minus the characters Unicode files under S.
        return !matches!(c, '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~');
    }
    matches!(
        c,
        '\u{00A1}' // INVERTED EXCLAMATION MARK
            | '\u{00AB}' // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{00BB}' // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | '\u{00BF}' // INVERTED QUESTION MARK
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{201A}' // SINGLE LOW-9 QUOTATION MARK
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{201E}' // DOUBLE LOW-9 QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
            | '\u{2039}' // SINGLE LEFT-POINTING ANGLE QUOTATION MARK
            | '\u{203A}' // SINGLE RIGHT-POINTING ANGLE QUOTATION MARK
    )
}

/// Render a character as its `U+XXXX` codepoint.
pub fn to_hex(c: char) -> String {
    format!("U+{:04X}", c as u32)
}

/// Replace an invisible character by a visible stand-in.
///
/// Used when characters end up in histogram reports where a raw tab or
/// newline would break the table layout.
pub fn print_friendly(c: char) -> char {
    match c {
        '\t' => '\u{21B9}',     // ↹
        '\n' => '\u{23CE}',     // ⏎
        '\u{00AD}' => '-',      // soft hyphen
        ' ' | '\u{2007}' | '\u{2008}' | '\u{2009}' | '\u{200A}' => '\u{2423}', // ␣
        '\u{00A0}' | '\u{202F}' => '\u{237D}', // ⍽ no-break spaces
        other => other,
    }
}

/// Replace invisible characters in a string by visible stand-ins.
///
/// Only tab, newline and the plain space are replaced; other characters
/// pass through unchanged.
pub fn print_friendly_string(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' => '\u{21B9}',
            '\n' => '\u{23CE}',
            ' ' => '\u{2423}',
            other => other,
        })
        .collect()
}
