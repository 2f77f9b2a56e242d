//! # verba-language
//!
//! Latin-to-English morphological analysis.
//!
//! Given one surface word, the analyzer returns every dictionary entry that
//! can produce it, together with how it was produced: which enclitic
//! particles were split off, which inflectional ending was applied, and,
//! for words the dictionary does not carry whole, which derivational
//! prefix or suffix had to be peeled to reach a known stem.
//!
//! ## Pipeline
//!
//! 1. **Normalization** ([`normalize`]) - lowercase, strip punctuation and
//!    digits.
//! 2. **Enclitic splitting** ([`enclitic`]) - at most one tackon and one
//!    packon/not-packon particle.
//! 3. **Uniques** - irregular forms matched verbatim short-circuit the rest.
//! 4. **Ending and stem matching** ([`matcher`]) - longest-suffix search
//!    over the ending table, then stem lookup with part-of-speech and
//!    paradigm agreement.
//! 5. **Dictionary join** ([`joiner`]) - stems resolve to entries; verb and
//!    participle readings separate here.
//! 6. **Principal parts** ([`lemma`]) - citation forms reconstructed on a
//!    copy of the entry.
//! 7. **Reduce** - when everything above found nothing, one derivational
//!    prefix and/or suffix is peeled and the cascade retried.
//! 8. **Formatting** ([`format`]) - grammar codes become typed, serializable
//!    records.
//!
//! ## Example
//!
//! ```
//! use verba_language::{Analyzer, Lexicon};
//!
//! let analyzer = Analyzer::new(Lexicon::shared());
//! let result = analyzer.parse("regis").unwrap();
//! assert_eq!(result.defs[0].orth, vec!["rex", "regis"]);
//! ```

pub mod analysis;
pub mod analyzer;
pub mod enclitic;
pub mod error;
pub mod format;
pub mod joiner;
pub mod lemma;
pub mod matcher;
pub mod normalize;

pub use analysis::{Analysis, AddonKind, Lexeme, StemMatch};
pub use analyzer::{Analyzer, Direction};
pub use error::{ParseError, ParseErrorKind};
pub use format::{FormDef, InflDef, ParseResult, WordDef};
pub use normalize::normalize;

// Re-export the lexicon entry points so callers need only this crate.
pub use verba_lexicon::{Lexicon, LexiconError};
