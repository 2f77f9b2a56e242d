//! Ending and stem matching.
//!
//! The ending table is kept sorted by ending length, shortest first. The
//! matcher walks it from the long end so the first hit fixes the match
//! length; equal-length hits accumulate (that is how competing paradigm
//! readings survive) and the first strictly shorter hit stops the scan.
//! Only when no real ending matches do the empty endings of the base-form
//! records come into play.

use verba_lexicon::{Infl, Lexicon};

use crate::analysis::StemMatch;

/// Collects the suffix-matching inflections of maximal length.
pub fn match_endings<'l>(lexicon: &'l Lexicon, s: &str) -> Vec<&'l Infl> {
    let mut matched: Vec<&Infl> = Vec::new();
    for infl in lexicon.inflections().iter().rev() {
        if !s.ends_with(infl.ending.as_str()) {
            continue;
        }
        if let Some(first) = matched.first() {
            if infl.ending.len() < first.ending.len() {
                break;
            }
        }
        matched.push(infl);
    }
    matched
}

/// Joins candidate endings to stems, enforcing part-of-speech and paradigm
/// agreement.
///
/// The strict pass requires the paradigm selectors to agree. If it comes up
/// empty, a second pass lets empty-ending inflections with the wildcard
/// selector attach to any stem; this is the base-form escape hatch for
/// words the paradigm tables do not reach.
pub fn match_stems(lexicon: &Lexicon, s: &str, endings: &[&Infl]) -> Vec<StemMatch> {
    let strict = collect(lexicon, s, endings, false);
    if !strict.is_empty() {
        return strict;
    }
    collect(lexicon, s, endings, true)
}

fn collect(lexicon: &Lexicon, s: &str, endings: &[&Infl], wildcard: bool) -> Vec<StemMatch> {
    let mut matches: Vec<StemMatch> = Vec::new();
    for infl in endings {
        let w = &s[..s.len() - infl.ending.len()];
        for stem in lexicon.stems() {
            if stem.orth != w {
                continue;
            }
            if !infl.pos.matches(stem.pos) {
                continue;
            }
            let agrees = infl.n.0 == stem.n.0
                || (wildcard && infl.ending.is_empty() && infl.n.0 == 0);
            if !agrees {
                continue;
            }
            match matches.iter_mut().find(|m| m.stem == *stem) {
                Some(existing) => existing.push_infl((*infl).clone()),
                None => matches.push(StemMatch::new(stem.clone(), (*infl).clone())),
            }
        }
    }
    matches
}
