// opentaal-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//
// Usage:
//   opentaal-spell [-d DICT_DIR] [OPTIONS]
//
// Options:
//   -d, --dict-dir DIR     Directory containing nl.dic and nl.aff
//   -l, --lang LANG        Language code (default: nl)
//   -s, --suggest          Also print suggestions for misspelled words
//   --split-spaces         Accept words whose space-separated terms all pass
//   --info                 Print dictionary entry count and version first
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_dir, args) = opentaal_cli::parse_dict_dir(&args);
    let (lang, args) = opentaal_cli::parse_value_arg(&args, "--lang", "-l");
    let lang = lang.unwrap_or_else(|| opentaal_nl::checker::DEFAULT_LANG.to_string());

    if opentaal_cli::wants_help(&args) {
        println!("opentaal-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: opentaal-spell [-d DICT_DIR] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-dir DIR     Directory containing nl.dic and nl.aff");
        println!("  -l, --lang LANG        Language code (default: nl)");
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  --split-spaces         Accept words whose space-separated terms all pass");
        println!("  --info                 Print dictionary entry count and version first");
        println!("  -h, --help             Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");
    let split_spaces = args.iter().any(|a| a == "--split-spaces");
    let show_info = args.iter().any(|a| a == "--info");

    let checker = opentaal_cli::load_checker(dict_dir.as_deref(), &lang)
        .unwrap_or_else(|e| opentaal_cli::fatal(&e));

    if show_info {
        match (checker.size(), checker.version()) {
            (Ok(size), Ok(version)) => println!("# {size} entries, version {version}"),
            (Err(e), _) | (_, Err(e)) => opentaal_cli::fatal(&e.to_string()),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let verdict = if split_spaces {
            checker.check_with_space_fallback(word)
        } else {
            checker.check(word)
        };
        match verdict {
            Ok(true) => {
                let _ = writeln!(out, "C: {word}");
            }
            Ok(false) => {
                let _ = writeln!(out, "W: {word}");
                if show_suggestions {
                    match checker.suggest(word) {
                        Ok(suggestions) => {
                            for suggestion in suggestions {
                                let _ = writeln!(out, "S: {suggestion}");
                            }
                        }
                        Err(e) => opentaal_cli::fatal(&e.to_string()),
                    }
                }
            }
            Err(e) => opentaal_cli::fatal(&e.to_string()),
        }
    }
}
