//! Command handlers for the `ngram` CLI.
//!
//! Shared input handling and logging setup live here in the module root.

use std::io::Read;
use std::sync::Once;

mod highlight;
mod segment;
mod tokenize;

pub use highlight::{highlight_text, HighlightOptions};
pub use segment::{segment_text, validate_text};
pub use tokenize::tokenize_text;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once, when `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

/// Read the raw bytes of `path`, or of stdin when no path is given.
///
/// Bytes are not checked here: malformed input is the library's to report.
/// Exits the process on I/O failure.
pub(super) fn read_input(path: Option<&str>) -> Vec<u8> {
    let Some(path) = path else {
        let mut buf = Vec::new();
        if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
            eprintln!("error reading stdin: {e}");
            std::process::exit(1);
        }
        return buf;
    };

    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Print `err` with its source chain and exit.
pub(super) fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    std::process::exit(1);
}
