//! Enclitic splitting.
//!
//! At most one tackon and one packon (or not-packon) particle is removed
//! from the end of a normalized word before lookup. Table order decides
//! which particle wins: longer and rarer forms are listed first, and the
//! first suffix hit in each table is taken.

use verba_lexicon::Lexicon;

use crate::analysis::{Analysis, AddonKind};

/// Splits enclitic particles off `s`.
///
/// Returns the residue and the analyses for whatever was removed, in
/// removal order. The literal word `est` never loses its `est` tackon:
/// the copula would otherwise split into an empty residue.
pub fn split_enclitics(lexicon: &Lexicon, s: &str) -> (String, Vec<Analysis>) {
    let addons = lexicon.addons();
    let mut s = s.to_string();
    let mut out = Vec::new();

    for tackon in &addons.tackons {
        if tackon.orth.is_empty() || !s.ends_with(&tackon.orth) {
            continue;
        }
        if s != "est" {
            s.truncate(s.len() - tackon.orth.len());
            out.push(Analysis::addon(tackon.clone(), AddonKind::Tackon));
        }
        break;
    }

    // Packons attach to the qu- pronouns only; everything else consults the
    // complementary table. Tickons are never applied here.
    let (table, kind) = if s.starts_with("qu") {
        (&addons.packons, AddonKind::Packon)
    } else {
        (&addons.not_packons, AddonKind::NotPackon)
    };
    for particle in table {
        if particle.orth.is_empty() || !s.ends_with(&particle.orth) {
            continue;
        }
        s.truncate(s.len() - particle.orth.len());
        out.push(Analysis::addon(particle.clone(), kind));
        break;
    }

    (s, out)
}
