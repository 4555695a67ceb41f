//! `tokenize`: print the n-grams a host index would receive.

use std::io::Write;

use fts_ngram::{NgramTokenizer, TokenizeError};

use super::{fail, read_input};

/// Tokenize the input with the given tokenizer options and print one
/// `start..end<TAB>text` line per n-gram.
pub fn tokenize_text(path: Option<&str>, options: &[String]) {
    let tokenizer = match NgramTokenizer::from_args(options) {
        Ok(tokenizer) => tokenizer,
        Err(err) => fail(&err),
    };
    let input = read_input(path);

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    let result = tokenizer.tokenize(&input, |token| {
        writeln!(out, "{}\t{}", token.span, token.text)
    });

    match result {
        Ok(()) => {}
        Err(TokenizeError::Fts(err)) => fail(&err),
        // Downstream closed the pipe; nothing more to print.
        Err(TokenizeError::Emit(err)) if err.kind() == std::io::ErrorKind::BrokenPipe => {}
        Err(TokenizeError::Emit(err)) => fail(&err),
    }
    if let Err(err) = out.flush() {
        if err.kind() != std::io::ErrorKind::BrokenPipe {
            fail(&err);
        }
    }
}
