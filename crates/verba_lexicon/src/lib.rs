//! # verba-lexicon
//!
//! Vocabulary types and lexicon loading for the verba Latin analyzer.
//!
//! Four word lists drive the analysis cascade:
//!
//! 1. **Dictionary entries** ([`DictEntry`]) - headwords with principal-part
//!    stems, paradigm selectors, and senses.
//! 2. **Stems** ([`Stem`]) - every stem spelling, keyed back to its entry.
//! 3. **Inflections** ([`Infl`]) - the endings that realize paradigm slots.
//! 4. **Uniques** ([`UniqueEntry`]) - irregular forms matched verbatim.
//!
//! plus the six [`AddonTables`] of derivational and enclitic fragments.
//!
//! All of it is parsed from the legacy fixed-width data files (the addon
//! tables from an embedded JSON document) exactly once, when a [`Lexicon`]
//! is built, and is read-only afterwards. [`Lexicon::shared`] exposes a
//! process-wide instance built from the sample data set embedded in this
//! crate; [`Lexicon::from_paths`] loads a full external data set in the
//! same formats.
//!
//! ```
//! use verba_lexicon::Lexicon;
//!
//! let lexicon = Lexicon::shared();
//! assert!(lexicon.stems().iter().all(|s| lexicon.entry_by_id(s.wid).is_some()));
//! ```

pub mod error;
pub mod loader;
pub mod records;
pub mod types;

pub use error::{CodeError, LexiconError};
pub use loader::Lexicon;
pub use records::{Addon, AddonTables, DictEntry, Infl, Stem, UniqueEntry};
pub use types::{
    Case, Gender, GrammaticalNumber, Mood, Paradigm, PartOfSpeech, Tense, Voice,
};
