//! N-gram tokenizer CLI
//!
//! Tokenizes, segments, validates or highlights text read from a file or
//! stdin. Set `RUST_LOG=debug` (or `trace`) to see what the library does.

mod commands;

use commands::{highlight_text, segment_text, tokenize_text, validate_text, HighlightOptions};

fn main() {
    commands::init_tracing();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "ngram starting");

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "tokenize" => {
            // Everything after `--` is handed to the tokenizer as its option list.
            let (own, options) = match args.iter().skip(2).position(|a| a == "--") {
                Some(split) => (&args[2..2 + split], &args[3 + split..]),
                None => (&args[2..], &[][..]),
            };
            tokenize_text(first_path(own), options);
        }
        "segment" => {
            segment_text(first_path(&args[2..]));
        }
        "validate" => {
            validate_text(first_path(&args[2..]));
        }
        "highlight" => {
            let mut options = HighlightOptions::default();
            let mut path = None;

            for arg in args.iter().skip(2) {
                if let Some(marker) = arg.strip_prefix("--open=") {
                    options.open = marker.to_string();
                } else if let Some(marker) = arg.strip_prefix("--close=") {
                    options.close = marker.to_string();
                } else if let Some(column) = arg.strip_prefix("--column=") {
                    let Ok(column) = column.parse() else {
                        eprintln!("error: invalid column '{column}'");
                        std::process::exit(1);
                    };
                    options.column = column;
                } else if let Some(spec) = arg.strip_prefix("--match=") {
                    let Some(parsed) = parse_match(spec) else {
                        eprintln!("error: invalid match '{spec}', expected OFFSET:LEN");
                        std::process::exit(1);
                    };
                    options.matches.push(parsed);
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    eprintln!("Usage: ngram highlight [--open=M] [--close=M] [--column=N] --match=OFFSET:LEN... [file]");
                    std::process::exit(1);
                }
            }

            highlight_text(path, &options);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("ngram {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// First non-flag argument, if any. `None` means stdin.
fn first_path(args: &[String]) -> Option<&str> {
    args.iter()
        .find(|arg| !arg.starts_with('-'))
        .map(String::as_str)
}

/// Parse `OFFSET:LEN` into `(token_offset, phrase_len)`.
fn parse_match(spec: &str) -> Option<(usize, usize)> {
    let (offset, len) = spec.split_once(':')?;
    Some((offset.parse().ok()?, len.parse().ok()?))
}

fn print_usage() {
    println!("N-gram full-text tokenizer");
    println!();
    println!("Usage: ngram <command> [options] [file]");
    println!();
    println!("Reads from stdin when no file is given.");
    println!();
    println!("Commands:");
    println!("  tokenize [file] [-- options...]  Print n-gram tokens with byte spans");
    println!("  segment [file]                   Print base tokens with categories");
    println!("  validate [file]                  Check that the input is well-formed UTF-8");
    println!("  highlight [file]                 Wrap matched token ranges in markers");
    println!("  help                             Show this help message");
    println!("  version                          Show version information");
    println!();
    println!("Tokenizer options (after --):");
    println!("  gram <1-4>          N-gram size (default: 2)");
    println!("  case_sensitive      Keep ASCII case instead of lowercasing");
    println!();
    println!("Highlight options:");
    println!("  --match=OFFSET:LEN  Phrase instance at token OFFSET spanning LEN tokens (repeatable)");
    println!("  --open=<marker>     Open marker (default: <b>)");
    println!("  --close=<marker>    Close marker (default: </b>)");
    println!("  --column=<n>        Column the matches belong to (default: 0)");
}
