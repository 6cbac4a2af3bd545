// opentaal-histogram: Character or word histogram of a text file.
//
// Counts characters (default) or whitespace-separated words and renders
// the sorted counts as TSV, Markdown or JSON.
//
// Usage:
//   opentaal-histogram [OPTIONS] [FILE]
//
// Reads FILE, or stdin when no file is given.
//
// Options:
//   --words            Count whitespace-separated words instead of characters
//   --md               Render as a Markdown table
//   --json             Render as JSON
//   --no-reverse       Lowest counts first
//   --no-header        Omit description and header lines
//   --no-unicode       Omit codepoint and category columns
//   -o, --output FILE  Write the report to FILE instead of stdout
//   -h, --help         Print help

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use opentaal_core::{Histogram, HistogramFormat};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (output, args) = opentaal_cli::parse_value_arg(&args, "--output", "-o");

    if opentaal_cli::wants_help(&args) {
        println!("opentaal-histogram: Character or word histogram of a text file.");
        println!();
        println!("Usage: opentaal-histogram [OPTIONS] [FILE]");
        println!();
        println!("Reads FILE, or stdin when no file is given.");
        println!();
        println!("Options:");
        println!("  --words            Count whitespace-separated words instead of characters");
        println!("  --md               Render as a Markdown table");
        println!("  --json             Render as JSON");
        println!("  --no-reverse       Lowest counts first");
        println!("  --no-header        Omit description and header lines");
        println!("  --no-unicode       Omit codepoint and category columns");
        println!("  -o, --output FILE  Write the report to FILE instead of stdout");
        println!("  -h, --help         Print this help");
        return;
    }

    let words = args.iter().any(|a| a == "--words");
    let md = args.iter().any(|a| a == "--md");
    let json = args.iter().any(|a| a == "--json");
    let format = HistogramFormat {
        desc: !args.iter().any(|a| a == "--no-header"),
        header: !args.iter().any(|a| a == "--no-header"),
        reverse: !args.iter().any(|a| a == "--no-reverse"),
        unicode: !args.iter().any(|a| a == "--no-unicode"),
        ..HistogramFormat::default()
    };
    let input: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if input.len() > 1 {
        opentaal_cli::fatal("at most one input file may be given");
    }

    let histogram = match input.first() {
        Some(path) => build_histogram(path, reader_for(path), words),
        None => build_histogram("stdin", Box::new(io::stdin().lock()), words),
    };

    let report = if md {
        histogram.to_md_string(format)
    } else if json {
        histogram.to_json_string(format)
    } else {
        histogram.to_tsv_string(format)
    }
    .unwrap_or_else(|e| opentaal_cli::fatal(&e.to_string()));

    match output {
        Some(path) => {
            File::create(&path)
                .and_then(|mut file| file.write_all(report.as_bytes()))
                .unwrap_or_else(|e| opentaal_cli::fatal(&format!("cannot write {path}: {e}")));
        }
        None => print!("{report}"),
    }
}

fn reader_for(path: &str) -> Box<dyn Read> {
    match File::open(path) {
        Ok(file) => Box::new(file),
        Err(e) => opentaal_cli::fatal(&format!("cannot open {path}: {e}")),
    }
}

/// Count characters, or whitespace-separated words, per line of input.
fn build_histogram(desc: &str, reader: Box<dyn Read>, words: bool) -> Histogram {
    let mut histogram = if words {
        Histogram::words(desc)
    } else {
        Histogram::chars(desc)
    };
    for line in BufReader::new(reader).lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => opentaal_cli::fatal(&format!("cannot read input: {e}")),
        };
        if words {
            for word in line.split_whitespace() {
                if let Err(e) = histogram.add(word) {
                    opentaal_cli::fatal(&e.to_string());
                }
            }
        } else if !line.is_empty() {
            if let Err(e) = histogram.add(&line) {
                opentaal_cli::fatal(&e.to_string());
            }
        }
    }
    histogram
}
