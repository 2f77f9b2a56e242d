//! Dictionary join.
//!
//! Resolves each stem match to its dictionary entry, merges matches that
//! reach the same entry, and separates finite-verb readings from participle
//! readings: a verb stem sitting in the fourth principal-part slot is
//! behaving as a participle, so only participle endings survive on it (and
//! only finite endings everywhere else).

use log::debug;
use verba_lexicon::{Lexicon, PartOfSpeech};

use crate::analysis::{Analysis, Lexeme, StemMatch};
use crate::lemma;

/// Joins stem matches to dictionary entries, appending one [`Analysis`] per
/// distinct entry to `out`.
///
/// In reduced mode the principal parts are left as raw stems; the full
/// display forms are only reconstructed for direct hits.
pub fn lookup_stems(
    lexicon: &Lexicon,
    stem_matches: Vec<StemMatch>,
    reduced: bool,
    out: &mut Vec<Analysis>,
) {
    for mut matched in stem_matches {
        let Some(entry) = lexicon.entry_by_id(matched.stem.wid) else {
            // Load-time validation makes this unreachable for well-formed
            // data; a dangling wid only drops the candidate.
            debug!("stem {:?} references missing entry id {}", matched.stem.orth, matched.stem.wid);
            continue;
        };

        if entry.pos == PartOfSpeech::Verb {
            let as_participle = entry.parts.get(3) == Some(&matched.stem.orth);
            matched
                .infls
                .retain(|infl| (infl.pos == PartOfSpeech::Participle) == as_participle);
        }

        let existing = out.iter_mut().find(|analysis| match &analysis.lexeme {
            Lexeme::Entry(seen) => seen.id == entry.id || seen.orth == entry.orth,
            _ => false,
        });
        match existing {
            Some(analysis) => {
                if analysis.stem_matches.iter().all(|m| m.stem != matched.stem) {
                    analysis.stem_matches.push(matched);
                }
            }
            None => {
                let entry = if reduced {
                    entry.clone()
                } else {
                    lemma::reconstruct(lexicon, entry)
                };
                out.push(Analysis::entry(entry, vec![matched]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{match_endings, match_stems};

    fn analyses(word: &str, reduced: bool) -> Vec<Analysis> {
        let lexicon = Lexicon::shared();
        let endings = match_endings(lexicon, word);
        let stems = match_stems(lexicon, word, &endings);
        let mut out = Vec::new();
        lookup_stems(lexicon, stems, reduced, &mut out);
        out
    }

    fn entry_of(analysis: &Analysis) -> &verba_lexicon::DictEntry {
        match &analysis.lexeme {
            Lexeme::Entry(entry) => entry,
            other => panic!("expected entry analysis, got {other:?}"),
        }
    }

    #[test]
    fn stem_in_fourth_slot_keeps_only_participle_endings() {
        let out = analyses("amatus", false);
        assert_eq!(out.len(), 1);
        for m in &out[0].stem_matches {
            assert!(m.infls.iter().all(|i| i.pos == PartOfSpeech::Participle));
        }
    }

    #[test]
    fn stem_elsewhere_keeps_only_finite_endings() {
        let out = analyses("amat", false);
        assert_eq!(out.len(), 1);
        for m in &out[0].stem_matches {
            assert!(m.infls.iter().all(|i| i.pos == PartOfSpeech::Verb));
        }
    }

    #[test]
    fn direct_mode_reconstructs_principal_parts() {
        let out = analyses("regis", false);
        assert_eq!(entry_of(&out[0]).parts, vec!["rex", "regis"]);
    }

    #[test]
    fn reduced_mode_keeps_raw_stems() {
        let out = analyses("curro", true);
        assert_eq!(entry_of(&out[0]).parts, vec!["curr", "curr", "cucurr", "curs"]);
    }

    #[test]
    fn shared_entries_are_never_mutated() {
        let lexicon = Lexicon::shared();
        let before: Vec<Vec<String>> =
            lexicon.entries().iter().map(|e| e.parts.clone()).collect();
        for _ in 0..3 {
            let _ = analyses("amat", false);
            let _ = analyses("regis", false);
        }
        let after: Vec<Vec<String>> =
            lexicon.entries().iter().map(|e| e.parts.clone()).collect();
        assert_eq!(before, after);
    }
}
