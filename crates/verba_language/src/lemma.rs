//! Principal-part reconstruction.
//!
//! Dictionary entries store bare stems; display wants full citation forms
//! (`am, am, amav, amat` should read `amo, amare, amavi, amatus`). Each
//! non-empty slot gets the ending of its canonical paradigm cell appended.
//! The work happens on a clone: the shared entry must survive any number of
//! parses byte-identical.

use verba_lexicon::{DictEntry, Infl, Lexicon, Paradigm, PartOfSpeech};

/// Canonical paradigm cells for the four verb slots.
const VERB_SLOTS: [(PartOfSpeech, &[&str]); 4] = [
    (PartOfSpeech::Verb, &["PRES", "ACTIVE", "IND", "1", "S"]),
    (PartOfSpeech::Verb, &["PRES", "ACTIVE", "INF", "0", "X"]),
    (PartOfSpeech::Verb, &["PERF", "ACTIVE", "IND", "1", "S"]),
    (PartOfSpeech::Participle, &["NOM", "S", "M", "PRES", "PASSIVE", "PPL"]),
];

/// Endings assumed for verb slots whose paradigm cell is missing from the
/// inflection table.
const VERB_FALLBACK: [&str; 4] = ["o", "?re", "i", "us"];

/// Canonical cells for the nominal slots (prefix match: gender trails).
const NOMINAL_SLOTS: [&[&str]; 2] = [&["NOM", "S"], &["GEN", "S"]];

const GENDER_CODES: [&str; 5] = ["M", "F", "N", "C", "X"];

/// Returns a clone of `entry` with citation endings appended to its parts.
pub fn reconstruct(lexicon: &Lexicon, entry: &DictEntry) -> DictEntry {
    let mut entry = entry.clone();
    match entry.pos {
        PartOfSpeech::Verb | PartOfSpeech::Participle => {
            for (slot, (pos, cell)) in VERB_SLOTS.iter().enumerate() {
                let Some(part) = entry.parts.get_mut(slot) else { continue };
                if part.is_empty() || part == "-" {
                    continue;
                }
                let ending = verb_ending(lexicon, *pos, entry.n, cell)
                    .unwrap_or(VERB_FALLBACK[slot]);
                part.push_str(ending);
            }
        }
        PartOfSpeech::Noun | PartOfSpeech::Adjective | PartOfSpeech::Pronoun => {
            let gender = citation_gender(&entry.form);
            for (slot, cell) in NOMINAL_SLOTS.iter().enumerate() {
                let Some(part) = entry.parts.get_mut(slot) else { continue };
                if part.is_empty() || part == "-" {
                    continue;
                }
                if let Some(ending) = nominal_ending(lexicon, entry.pos, entry.n, cell, gender) {
                    part.push_str(ending);
                }
            }
        }
        _ => {}
    }
    entry
}

/// The gender letter of an entry's paradigm descriptor, defaulting to
/// masculine for entries (adjectives, mostly) that do not carry one.
fn citation_gender(form: &str) -> &str {
    form.split_whitespace()
        .find(|token| GENDER_CODES.contains(token))
        .unwrap_or("M")
}

fn cell_matches(infl: &Infl, cell: &[&str], exact: bool) -> bool {
    let mut tokens = infl.form.split_whitespace();
    for want in cell {
        if tokens.next() != Some(*want) {
            return false;
        }
    }
    !exact || tokens.next().is_none()
}

fn verb_ending<'l>(
    lexicon: &'l Lexicon,
    pos: PartOfSpeech,
    n: Paradigm,
    cell: &[&str],
) -> Option<&'l str> {
    for want in [n, Paradigm::ANY] {
        let found = lexicon
            .inflections()
            .iter()
            .find(|infl| infl.pos == pos && infl.n == want && cell_matches(infl, cell, true));
        if let Some(infl) = found {
            return Some(&infl.ending);
        }
    }
    None
}

/// Nominal slots prefer the row whose gender agrees with the citation
/// gender (or is unmarked), so an adjective cites as `bonus`, not `bona`.
fn nominal_ending<'l>(
    lexicon: &'l Lexicon,
    pos: PartOfSpeech,
    n: Paradigm,
    cell: &[&str],
    gender: &str,
) -> Option<&'l str> {
    for want in [n, Paradigm::ANY] {
        let mut first = None;
        for infl in lexicon.inflections() {
            if infl.pos != pos || infl.n != want || !cell_matches(infl, cell, false) {
                continue;
            }
            if first.is_none() {
                first = Some(infl);
            }
            let row_gender = infl.form.split_whitespace().nth(2);
            if row_gender == Some(gender) || matches!(row_gender, Some("X") | Some("C")) {
                return Some(&infl.ending);
            }
        }
        if let Some(infl) = first {
            return Some(&infl.ending);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(orth: &str) -> DictEntry {
        Lexicon::shared()
            .entries()
            .iter()
            .find(|e| e.orth == orth)
            .unwrap_or_else(|| panic!("no entry {orth}"))
            .clone()
    }

    #[test]
    fn first_conjugation_verb_cites_all_four_parts() {
        let amo = reconstruct(Lexicon::shared(), &entry("am"));
        assert_eq!(amo.parts, vec!["amo", "amare", "amavi", "amatus"]);
    }

    #[test]
    fn third_conjugation_verb_cites_all_four_parts() {
        let curro = reconstruct(Lexicon::shared(), &entry("curr"));
        assert_eq!(curro.parts, vec!["curro", "currere", "cucurri", "cursus"]);
    }

    #[test]
    fn third_declension_noun_cites_nominative_and_genitive() {
        let rex = reconstruct(Lexicon::shared(), &entry("rex"));
        assert_eq!(rex.parts, vec!["rex", "regis"]);
    }

    #[test]
    fn first_declension_noun_follows_its_gender() {
        let terra = reconstruct(Lexicon::shared(), &entry("terr"));
        assert_eq!(terra.parts, vec!["terra", "terrae"]);
    }

    #[test]
    fn adjective_cites_masculine() {
        let bonus = reconstruct(Lexicon::shared(), &entry("bon"));
        assert_eq!(bonus.parts[0], "bonus");
        assert_eq!(bonus.parts[1], "boni");
    }

    #[test]
    fn indeclinables_are_left_alone() {
        let non = reconstruct(Lexicon::shared(), &entry("non"));
        assert_eq!(non.parts, vec!["non"]);
    }

    #[test]
    fn reconstruction_clones_instead_of_mutating() {
        let lexicon = Lexicon::shared();
        let shared = lexicon.entries().iter().find(|e| e.orth == "am").unwrap();
        let parts_before = shared.parts.clone();
        let _ = reconstruct(lexicon, shared);
        let _ = reconstruct(lexicon, shared);
        assert_eq!(shared.parts, parts_before);
    }
}
