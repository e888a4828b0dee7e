// hilite-profile: inspect built-in language profiles.
//
// Usage:
//   hilite-profile --list
//   hilite-profile -l CODE
//
// Options:
//   --list                List available language codes
//   -l, --language CODE   Print the profile for CODE as JSON
//   -h, --help            Print help

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if hilite_cli::wants_help(&args) || args.is_empty() {
        println!("hilite-profile: inspect built-in language profiles.");
        println!();
        println!("Usage:");
        println!("  hilite-profile --list");
        println!("  hilite-profile -l CODE");
        println!();
        println!("Options:");
        println!("  --list                List available language codes");
        println!("  -l, --language CODE   Print the profile for CODE as JSON");
        println!("  -h, --help            Print this help");
        return;
    }

    if args.iter().any(|a| a == "--list") {
        for code in hilite_lang::available() {
            println!("{code}");
        }
        return;
    }

    let (code, rest) = hilite_cli::parse_flag(&args, "-l", "--language");
    if let Some(unknown) = rest.first() {
        hilite_cli::fatal(&format!("unknown argument: {unknown}"));
    }

    let Some(code) = code else {
        hilite_cli::fatal("missing -l CODE (or use --list)");
    };

    let Some(profile) = hilite_lang::profile(&code) else {
        hilite_cli::fatal(&format!(
            "unknown language code: {code} (available: {})",
            hilite_lang::available().join(", ")
        ));
    };

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => println!("{json}"),
        Err(e) => hilite_cli::fatal(&format!("failed to serialize profile: {e}")),
    }
}
