//! `highlight`: mark up matched token ranges.

use fts_ngram::{Highlighter, PhraseMatches};

use super::{fail, read_input};

/// Options of the `highlight` command.
#[derive(Clone, Debug)]
pub struct HighlightOptions {
    pub open: String,
    pub close: String,
    pub column: usize,
    /// `(token_offset, phrase_len)` pairs, each its own phrase.
    pub matches: Vec<(usize, usize)>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        HighlightOptions {
            open: "<b>".to_string(),
            close: "</b>".to_string(),
            column: 0,
            matches: Vec::new(),
        }
    }
}

/// Highlight the input as the given column and print the result.
pub fn highlight_text(path: Option<&str>, options: &HighlightOptions) {
    let mut matches = PhraseMatches::new(options.matches.iter().map(|&(_, len)| len).collect());
    for (phrase, &(offset, _)) in options.matches.iter().enumerate() {
        if let Err(err) = matches.push(phrase, options.column, offset) {
            fail(&err);
        }
    }

    let input = read_input(path);
    let highlighter = Highlighter::new(&options.open, &options.close);
    match highlighter.highlight(&input, options.column, &matches) {
        Ok(marked) => print!("{marked}"),
        Err(err) => fail(&err),
    }
}
