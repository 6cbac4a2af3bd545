// opentaal-extract: Extract plain text from HTML files.
//
// Writes a sibling `.txt` file next to each HTML file. Files whose output
// already exists are skipped unless overriding is enabled, so a corpus
// directory can be re-run cheaply.
//
// Usage:
//   opentaal-extract [OPTIONS] FILE...
//
// Options:
//   --override    Rewrite existing output files
//   -h, --help    Print help

use std::path::Path;

use opentaal_nl::Extractor;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if opentaal_cli::wants_help(&args) || args.is_empty() {
        println!("opentaal-extract: Extract plain text from HTML files.");
        println!();
        println!("Usage: opentaal-extract [OPTIONS] FILE...");
        println!();
        println!("Writes a sibling .txt file next to each HTML file.");
        println!();
        println!("Options:");
        println!("  --override    Rewrite existing output files");
        println!("  -h, --help    Print this help");
        return;
    }

    let override_existing = args.iter().any(|a| a == "--override");
    let files: Vec<&String> = args.iter().filter(|a| !a.starts_with('-')).collect();
    if files.is_empty() {
        opentaal_cli::fatal("no input files given");
    }

    let extractor = Extractor::new(override_existing);
    let mut failures = 0;
    for file in files {
        match extractor.extract_file(Path::new(file)) {
            Ok(true) => println!("extracted: {file}"),
            Ok(false) => println!("skipped:   {file}"),
            Err(e) => {
                eprintln!("error: {file}: {e}");
                failures += 1;
            }
        }
    }
    if failures > 0 {
        std::process::exit(1);
    }
}
