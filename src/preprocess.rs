//! Source normalization that runs before lexing.
//!
//! Folds mobile-keyboard smart quotes/dashes to ASCII, normalizes line
//! endings, and discards `#`-prefixed lines. No macro expansion.

/// Sanitize raw source for the lexer. Pure function of its input.
pub fn preprocess(source: &str) -> String {
    let normalized = source.replace("\r\n", "\n");
    let folded = fold_smart_characters(&normalized);
    strip_hash_lines(&folded)
}

fn fold_smart_characters(source: &str) -> String {
    source
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect()
}

fn strip_hash_lines(source: &str) -> String {
    source
        .split('\n')
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
