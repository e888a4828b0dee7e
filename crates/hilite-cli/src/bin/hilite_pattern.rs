// hilite-pattern: compile search tokens into fuzzy regex fragments.
//
// Reads tokens from stdin (one per line) and prints the compiled
// pattern fragment for each. The fragment is meant to be embedded in a
// larger case-insensitive regex by the consumer.
//
// Usage:
//   hilite-pattern [-l CODE | -p FILE]
//
// Options:
//   -l, --language CODE   Use a built-in language profile (e.g. fr, tr)
//   -p, --profile FILE    Load a profile from a JSON file
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

use hilite_core::PatternCompiler;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if hilite_cli::wants_help(&args) {
        println!("hilite-pattern: compile search tokens into fuzzy regex fragments.");
        println!();
        println!("Usage: hilite-pattern [-l CODE | -p FILE]");
        println!();
        println!("Reads tokens from stdin (one per line) and prints one");
        println!("pattern fragment per token. Embed the fragment in a");
        println!("case-insensitive regex to match the token and its variants.");
        println!();
        println!("Options:");
        println!("  -l, --language CODE   Built-in language profile (e.g. fr, tr)");
        println!("  -p, --profile FILE    Load a profile from a JSON file");
        println!("  -h, --help            Print this help");
        return;
    }

    let (profile, rest) = hilite_cli::load_profile(&args).unwrap_or_else(|e| hilite_cli::fatal(&e));
    if let Some(unknown) = rest.first() {
        hilite_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let compiler =
        PatternCompiler::new(&profile).unwrap_or_else(|e| hilite_cli::fatal(&e.to_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => hilite_cli::fatal(&format!("failed to read stdin: {e}")),
        };
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if let Err(e) = writeln!(out, "{}", compiler.compile(token)) {
            hilite_cli::fatal(&format!("failed to write output: {e}"));
        }
    }

    if let Err(e) = out.flush() {
        hilite_cli::fatal(&format!("failed to flush output: {e}"));
    }
}
