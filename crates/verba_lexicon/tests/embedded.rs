//! Integrity checks for the embedded sample data set.

use verba_lexicon::{Lexicon, Paradigm, PartOfSpeech};

#[test]
fn embedded_data_set_loads() {
    let lexicon = Lexicon::from_embedded().expect("embedded data set must load");
    assert!(!lexicon.entries().is_empty());
    assert!(!lexicon.stems().is_empty());
    assert!(!lexicon.inflections().is_empty());
    assert!(!lexicon.uniques().is_empty());
}

#[test]
fn every_stem_resolves_to_exactly_one_entry() {
    let lexicon = Lexicon::shared();
    for stem in lexicon.stems() {
        let entry = lexicon.entry_by_id(stem.wid);
        assert!(
            entry.is_some(),
            "stem {:?} references missing entry id {}",
            stem.orth,
            stem.wid
        );
    }
    // Ids are unique by construction (line numbers); spot-check the index.
    let ids: Vec<u32> = lexicon.entries().iter().map(|e| e.id).collect();
    let mut deduped = ids.clone();
    deduped.dedup();
    assert_eq!(ids, deduped);
}

#[test]
fn inflections_are_sorted_shortest_ending_first() {
    let lexicon = Lexicon::shared();
    let lengths: Vec<usize> = lexicon.inflections().iter().map(|i| i.ending.len()).collect();
    let mut sorted = lengths.clone();
    sorted.sort();
    assert_eq!(lengths, sorted);
    // The endingless records are present and lead the table.
    assert!(lexicon.inflections().first().unwrap().ending.is_empty());
}

#[test]
fn entry_ids_are_line_numbers() {
    let lexicon = Lexicon::shared();
    for (index, entry) in lexicon.entries().iter().enumerate() {
        assert_eq!(entry.id, index as u32 + 1);
    }
}

#[test]
fn addon_tables_keep_load_order() {
    let lexicon = Lexicon::shared();
    let addons = lexicon.addons();

    // The enclitic particles, in the order the splitter consults them.
    let tackons: Vec<&str> = addons.tackons.iter().map(|a| a.orth.as_str()).collect();
    assert_eq!(tackons, ["que", "ne", "ve", "est"]);

    // Longer variants precede their short forms in the prefix table.
    let abs = addons.prefixes.iter().position(|a| a.orth == "abs").unwrap();
    let ab = addons.prefixes.iter().position(|a| a.orth == "ab").unwrap();
    assert!(abs < ab);

    // Tickons are loaded even though analysis never consults them.
    assert!(!addons.tickons.is_empty());
    assert!(addons.tickons.iter().all(|a| a.pos.starts_with("PACK")));
}

#[test]
fn verb_paradigm_rows_carry_fixed_width_forms() {
    let lexicon = Lexicon::shared();
    let verb_rows: Vec<_> = lexicon
        .inflections()
        .iter()
        .filter(|i| i.pos == PartOfSpeech::Verb && !i.form.is_empty())
        .collect();
    assert!(!verb_rows.is_empty());
    for row in &verb_rows {
        assert_eq!(row.form.len(), 22, "verb form {:?} is not 22 columns", row.form);
    }

    let participle_rows: Vec<_> = lexicon
        .inflections()
        .iter()
        .filter(|i| i.pos == PartOfSpeech::Participle)
        .collect();
    assert!(!participle_rows.is_empty());
    for row in &participle_rows {
        assert_eq!(row.form.len(), 24, "participle form {:?} is not 24 columns", row.form);
    }
}

#[test]
fn first_conjugation_present_has_wildcardless_selector() {
    let lexicon = Lexicon::shared();
    let at = lexicon
        .inflections()
        .iter()
        .find(|i| i.ending == "at" && i.pos == PartOfSpeech::Verb)
        .expect("first-conjugation 3rd person present");
    assert_eq!(at.n, Paradigm(1, 1));
    assert_eq!(at.form, "PRES  ACTIVE  IND  3 S");
}
