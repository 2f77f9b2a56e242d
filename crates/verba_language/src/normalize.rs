//! Input normalization.
//!
//! Surface text reaches the analyzer lowercased, with ASCII punctuation and
//! decimal digits removed and em-dashes (including the common mojibake
//! rendering of one) turned into spaces. The function is idempotent, so the
//! pipeline may be re-entered with already-normalized text.

/// The ASCII punctuation class stripped from input.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The UTF-8 bytes of an em-dash misread as Latin-1.
const MOJIBAKE_DASH: &str = "\u{e2}\u{20ac}\u{201d}";

/// Lowercases `input` and strips punctuation and digits; em-dashes become
/// spaces so that joined clauses still split into words.
pub fn normalize(input: &str) -> String {
    let input = input.replace(MOJIBAKE_DASH, " ");
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\u{2014}' {
            out.push(' ');
        } else if PUNCTUATION.contains(c) || c.is_ascii_digit() {
            // dropped
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
