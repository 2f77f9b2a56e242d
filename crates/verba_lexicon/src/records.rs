//! Lexicon record types.
//!
//! One struct per legacy table: dictionary entries, stems, inflections,
//! uniques, and addons. Records are built once by the loader and shared
//! read-only for the lifetime of the process; analysis never mutates them.

use serde::{Deserialize, Serialize};

use crate::types::{Paradigm, PartOfSpeech};

/// A dictionary headword with its principal-part stems and senses.
///
/// `parts` always leads with `orth` and holds the raw stems as listed in the
/// dictionary file; the display forms (stem + canonical ending) are
/// reconstructed per analysis on a clone, never on this shared record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DictEntry {
    /// Stable id: the 1-based line number in the dictionary file.
    pub id: u32,
    pub orth: String,
    /// Principal-part stems; `-` marks a slot the paradigm lacks.
    pub parts: Vec<String>,
    pub pos: PartOfSpeech,
    /// Raw paradigm descriptor, e.g. `3 1 M T` or `1 1 TRANS`.
    pub form: String,
    pub n: Paradigm,
    pub senses: Vec<String>,
}

/// One stem spelling, keyed back to its dictionary entry by `wid`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stem {
    pub orth: String,
    pub pos: PartOfSpeech,
    pub form: String,
    pub n: Paradigm,
    /// Foreign key into [`DictEntry::id`].
    pub wid: u32,
}

/// An inflectional ending realizing one paradigm slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Infl {
    /// The suffix itself; empty for base forms and indeclinables.
    pub ending: String,
    pub pos: PartOfSpeech,
    pub n: Paradigm,
    /// Raw paradigm-slot descriptor, e.g. `GEN S M` or
    /// `PRES  ACTIVE  IND  1 S`. Translated only at format time.
    pub form: String,
    /// Section note from the inflection file (`greek`, `i-stems_m-f`, ...).
    pub note: &'static str,
}

/// A fully-inflected irregular form matched verbatim, before any ending
/// analysis. A hit here short-circuits the whole cascade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniqueEntry {
    pub orth: String,
    pub pos: PartOfSpeech,
    pub form: String,
    pub senses: Vec<String>,
}

/// A derivational or enclitic word fragment.
///
/// `pos` and `form` stay raw strings: the addon tables mix plain tags
/// (`X`) with tag-plus-paradigm strings (`PACK    1  0 REL`), and the
/// analyzer only ever needs them verbatim for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addon {
    pub orth: String,
    pub pos: String,
    #[serde(default)]
    pub form: String,
    pub senses: Vec<String>,
}

impl Addon {
    /// The leading tag of `pos`, when it parses as a known part of speech.
    pub fn pos_tag(&self) -> Option<PartOfSpeech> {
        self.pos.split_whitespace().next().and_then(PartOfSpeech::from_tag)
    }

    /// Raw descriptor for display: the dedicated form field when present,
    /// otherwise the pos string (tackon records carry no form of their own).
    pub fn display_form(&self) -> &str {
        if self.form.is_empty() {
            &self.pos
        } else {
            &self.form
        }
    }
}

/// The six addon tables, in their load order. Order within each table is
/// significant: the splitter and the reducer take the first hit.
///
/// `tickons` are loaded for completeness but never consulted during
/// analysis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddonTables {
    #[serde(default)]
    pub tickons: Vec<Addon>,
    #[serde(default)]
    pub tackons: Vec<Addon>,
    #[serde(default)]
    pub not_packons: Vec<Addon>,
    #[serde(default)]
    pub packons: Vec<Addon>,
    #[serde(default)]
    pub prefixes: Vec<Addon>,
    #[serde(default)]
    pub suffixes: Vec<Addon>,
}
