//! Per-word analysis records.
//!
//! An [`Analysis`] pairs the lexeme that matched (dictionary entry, unique
//! form, or addon fragment) with the stem/ending evidence that produced the
//! match. Analyses are built fresh for every `parse` call; lexicon records
//! are cloned into them so the shared tables stay untouched.

use verba_lexicon::{Addon, DictEntry, Infl, Stem, UniqueEntry};

/// Which addon table a fragment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonKind {
    Tackon,
    Packon,
    NotPackon,
    Prefix,
    Suffix,
}

impl AddonKind {
    /// Label used in output ("prefix", "suffix", ...).
    pub fn label(self) -> &'static str {
        match self {
            AddonKind::Tackon => "tackon",
            AddonKind::Packon => "packon",
            AddonKind::NotPackon => "not_packon",
            AddonKind::Prefix => "prefix",
            AddonKind::Suffix => "suffix",
        }
    }
}

/// The lexeme behind an analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    /// A dictionary entry reached through stem/ending analysis. Holds a
    /// deep copy so principal-part reconstruction never touches the
    /// shared entry.
    Entry(DictEntry),
    /// An irregular form matched verbatim.
    Unique(UniqueEntry),
    /// An enclitic or derivational fragment split off the word.
    Addon { addon: Addon, kind: AddonKind },
}

/// One stem together with the endings that attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct StemMatch {
    pub stem: Stem,
    pub infls: Vec<Infl>,
}

impl StemMatch {
    pub fn new(stem: Stem, infl: Infl) -> StemMatch {
        StemMatch { stem, infls: vec![infl] }
    }

    /// Adds an inflection unless one with the same paradigm slot is already
    /// present.
    pub fn push_infl(&mut self, infl: Infl) {
        if self.infls.iter().all(|existing| existing.form != infl.form) {
            self.infls.push(infl);
        }
    }
}

/// One candidate reading of the input word.
///
/// Every analysis carries a stem-match list; for uniques and addons it is
/// empty, which keeps downstream code free of per-variant special cases.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub lexeme: Lexeme,
    pub stem_matches: Vec<StemMatch>,
}

impl Analysis {
    pub fn entry(entry: DictEntry, stem_matches: Vec<StemMatch>) -> Analysis {
        Analysis { lexeme: Lexeme::Entry(entry), stem_matches }
    }

    pub fn unique(unique: UniqueEntry) -> Analysis {
        Analysis { lexeme: Lexeme::Unique(unique), stem_matches: Vec::new() }
    }

    pub fn addon(addon: Addon, kind: AddonKind) -> Analysis {
        Analysis { lexeme: Lexeme::Addon { addon, kind }, stem_matches: Vec::new() }
    }

    /// True when this analysis is a dictionary-entry reading rather than a
    /// split-off fragment or unique.
    pub fn is_entry(&self) -> bool {
        matches!(self.lexeme, Lexeme::Entry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verba_lexicon::{Paradigm, PartOfSpeech};

    fn infl(ending: &str, form: &str) -> Infl {
        Infl {
            ending: ending.to_string(),
            pos: PartOfSpeech::Noun,
            n: Paradigm(1, 1),
            form: form.to_string(),
            note: "",
        }
    }

    #[test]
    fn stem_match_rejects_duplicate_forms() {
        let stem = Stem {
            orth: "terr".to_string(),
            pos: PartOfSpeech::Noun,
            form: "1 1 F T".to_string(),
            n: Paradigm(1, 1),
            wid: 4,
        };
        let mut m = StemMatch::new(stem, infl("ae", "GEN S F"));
        m.push_infl(infl("ae", "GEN S F"));
        m.push_infl(infl("ae", "DAT S F"));
        assert_eq!(m.infls.len(), 2);
    }

    #[test]
    fn addon_analyses_carry_empty_stem_lists() {
        let addon = Addon {
            orth: "que".to_string(),
            pos: "X".to_string(),
            form: String::new(),
            senses: vec!["-que = and;".to_string()],
        };
        let analysis = Analysis::addon(addon, AddonKind::Tackon);
        assert!(analysis.stem_matches.is_empty());
        assert!(!analysis.is_entry());
        assert_eq!(AddonKind::Tackon.label(), "tackon");
    }
}
