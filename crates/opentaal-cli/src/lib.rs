// opentaal-cli: shared utilities for CLI tools.

use std::path::Path;
use std::process;

/// Search for a dictionary directory containing `{lang}.dic`.
///
/// Search order:
/// 1. `dict_dir` argument (if provided)
/// 2. `OPENTAAL_DICT_PATH` environment variable
/// 3. `/usr/share/hunspell/`
/// 4. `/usr/local/share/hunspell/`
/// 5. Current working directory
///
/// The returned directory ends with a path separator so file names can be
/// derived by concatenation.
pub fn find_dict_dir(dict_dir: Option<&str>, lang: &str) -> Result<String, String> {
    let search_dirs = build_search_dirs(dict_dir);

    for dir in &search_dirs {
        if Path::new(&format!("{dir}{lang}.dic")).is_file() {
            return Ok(dir.clone());
        }
    }

    Err(format!(
        "could not find {lang}.dic in any of the search paths:\n{}",
        search_dirs
            .iter()
            .map(|d| format!("  - {d}"))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of directories to search, each ending with a separator.
fn build_search_dirs(dict_dir: Option<&str>) -> Vec<String> {
    let mut dirs = Vec::new();

    // 1. Explicit directory from argument
    if let Some(dir) = dict_dir {
        dirs.push(with_separator(dir));
    }

    // 2. OPENTAAL_DICT_PATH environment variable
    if let Ok(env_dir) = std::env::var("OPENTAAL_DICT_PATH") {
        dirs.push(with_separator(&env_dir));
    }

    // 3. System paths
    dirs.push("/usr/share/hunspell/".to_string());
    dirs.push("/usr/local/share/hunspell/".to_string());

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(with_separator(&cwd.display().to_string()));
    }

    dirs
}

fn with_separator(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// Open a Hunspell-backed checker, searching for dictionaries as
/// described in [`find_dict_dir`].
#[cfg(feature = "hunspell")]
pub fn load_checker(
    dict_dir: Option<&str>,
    lang: &str,
) -> Result<opentaal_nl::Checker<opentaal_nl::HunspellEngine>, String> {
    let dir = find_dict_dir(dict_dir, lang)?;
    opentaal_nl::Checker::open(lang, &dir).map_err(|e| format!("failed to open checker: {e}"))
}

/// Parse a `--dict-dir=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_dir, remaining_args)`.
pub fn parse_dict_dir(args: &[String]) -> (Option<String>, Vec<String>) {
    parse_value_arg(args, "--dict-dir", "-d")
}

/// Parse a named argument taking a value, in `--name=VALUE`, `--name VALUE`
/// or `SHORT VALUE` form.
///
/// Returns `(value, remaining_args)`.
pub fn parse_value_arg(
    args: &[String],
    long: &str,
    short: &str,
) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;
    let prefix = format!("{long}=");

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_value_arg_equals_form() {
        let (value, rest) = parse_value_arg(&args(&["--lang=nl", "file.txt"]), "--lang", "-l");
        assert_eq!(value.as_deref(), Some("nl"));
        assert_eq!(rest, args(&["file.txt"]));
    }

    #[test]
    fn parse_value_arg_separate_forms() {
        let (value, rest) = parse_value_arg(&args(&["--lang", "nl"]), "--lang", "-l");
        assert_eq!(value.as_deref(), Some("nl"));
        assert!(rest.is_empty());

        let (value, rest) = parse_value_arg(&args(&["-l", "nl", "x"]), "--lang", "-l");
        assert_eq!(value.as_deref(), Some("nl"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn parse_value_arg_absent() {
        let (value, rest) = parse_value_arg(&args(&["file.txt"]), "--lang", "-l");
        assert_eq!(value, None);
        assert_eq!(rest, args(&["file.txt"]));
    }

    #[test]
    fn dir_separator_is_normalized() {
        assert_eq!(with_separator("/tmp/dicts"), "/tmp/dicts/");
        assert_eq!(with_separator("/tmp/dicts/"), "/tmp/dicts/");
    }

    #[test]
    fn explicit_dir_is_searched_first() {
        let dirs = build_search_dirs(Some("/tmp/dicts"));
        assert_eq!(dirs[0], "/tmp/dicts/");
        assert!(dirs.contains(&"/usr/share/hunspell/".to_string()));
    }
}
