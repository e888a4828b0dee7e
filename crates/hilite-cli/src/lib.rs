// hilite-cli: shared utilities for CLI tools.

use std::process;

use hilite_core::LanguageProfile;

/// Check for `-h` / `--help` anywhere in the arguments.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Parse a `--flag=VALUE`, `--flag VALUE` or `-f VALUE` argument.
///
/// Returns `(value, remaining_args)`.
pub fn parse_flag(args: &[String], short: &str, long: &str) -> (Option<String>, Vec<String>) {
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    let long_eq = format!("{long}=");
    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&long_eq) {
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

/// Parse a profile from JSON text.
///
/// Missing fields default to empty, so a file containing only
/// `{"suffixes": ["s"]}` is a complete profile.
pub fn parse_profile_json(text: &str) -> Result<LanguageProfile, String> {
    serde_json::from_str(text).map_err(|e| format!("invalid profile JSON: {e}"))
}

/// Resolve the language profile from `-l CODE` or `-p FILE` arguments.
///
/// With neither flag the empty profile is used (suffix and punctuation
/// relaxation only applies to what the empty profile defines, i.e. the
/// fixed punctuation class). Returns the profile and the remaining
/// arguments.
pub fn load_profile(args: &[String]) -> Result<(LanguageProfile, Vec<String>), String> {
    let (code, args) = parse_flag(args, "-l", "--language");
    let (path, args) = parse_flag(&args, "-p", "--profile");

    let profile = match (code, path) {
        (Some(_), Some(_)) => return Err("use either -l or -p, not both".to_string()),
        (Some(code), None) => hilite_lang::profile(&code).ok_or_else(|| {
            format!(
                "unknown language code: {code} (available: {})",
                hilite_lang::available().join(", ")
            )
        })?,
        (None, Some(path)) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {path}: {e}"))?;
            parse_profile_json(&text)?
        }
        (None, None) => LanguageProfile::default(),
    };

    Ok((profile, args))
}
