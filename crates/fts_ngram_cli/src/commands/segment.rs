//! `segment` and `validate`: inspect the base layer.

use super::{fail, read_input};

/// Print the base tokens of the input: span, category and text.
pub fn segment_text(path: Option<&str>) {
    let input = read_input(path);
    let tokens = match fts_ngram_core::segment(&input) {
        Ok(tokens) => tokens,
        Err(err) => fail(&err),
    };

    println!("{} tokens:", tokens.len());
    for token in &tokens {
        println!("  {:<6} {} {:?}", token.category, token.span, token.text);
    }
}

/// Report whether the input is well-formed UTF-8.
pub fn validate_text(path: Option<&str>) {
    let input = read_input(path);
    match fts_ngram_core::utf8::validate(&input) {
        Ok(()) => println!("ok: {} bytes of valid UTF-8", input.len()),
        Err(err) => fail(&err),
    }
}
