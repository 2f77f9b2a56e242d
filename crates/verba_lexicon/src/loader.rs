//! Loaders for the legacy lexicon files.
//!
//! The four word lists ship as fixed-width text in the layouts the original
//! WORDS data files froze decades ago; the addon tables ship as one JSON
//! document. Everything is parsed exactly once, when the [`Lexicon`] is
//! built, and is immutable afterwards.
//!
//! ## File layouts
//!
//! - **Dictionary**: one entry per line; columns 0..19, 19..38, 38..57 and
//!   57..76 hold the four principal-part stems (`zzz` decodes to `-`),
//!   76..83 the part of speech, 83..100 the paradigm descriptor (leading
//!   tokens are the `n` selector), 109.. the `;`-separated senses. The entry
//!   id is the 1-based line number.
//! - **Stems**: columns 0..19 orth, 19..26 part of speech, 26..45 paradigm
//!   descriptor, 50.. the dictionary line number (`wid`).
//! - **Inflections**: column offsets depend on the line number; see
//!   [`SECTIONS`].
//! - **Uniques**: three-line records (orth / pos+form / senses).

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::error::LexiconError;
use crate::records::{Addon, AddonTables, DictEntry, Infl, Stem, UniqueEntry};
use crate::types::{Paradigm, PartOfSpeech};

const DICTLINE: &str = include_str!("../assets/DICTLINE.GEN");
const STEMLIST: &str = include_str!("../assets/STEMLIST.GEN");
const INFLECTS: &str = include_str!("../assets/INFLECTS.LAT");
const UNIQUES: &str = include_str!("../assets/UNIQUES.LAT");
const ADDONS: &str = include_str!("../assets/addons.json");

/// One line-number range of the inflection file together with the column
/// layout its records use.
///
/// The inflection file interleaves prose headers with record blocks, and the
/// record columns shift between blocks (noun and adjective rows are narrower
/// than verb rows, participles shift the paradigm selector by one column,
/// and so on). The original program bakes these offsets in by line number;
/// this table is that knowledge, frozen.
struct Section {
    /// Half-open 0-based line range.
    lines: (usize, usize),
    pos: (usize, usize),
    n: (usize, usize),
    form: (usize, usize),
    /// `None` for the block of endingless records.
    ending: Option<(usize, usize)>,
    note: &'static str,
}

const fn nominal(lo: usize, hi: usize, note: &'static str) -> Section {
    Section { lines: (lo, hi), pos: (0, 6), n: (6, 9), form: (10, 17), ending: Some((23, 33)), note }
}

const fn verbal(lo: usize, hi: usize, note: &'static str) -> Section {
    Section { lines: (lo, hi), pos: (0, 6), n: (6, 9), form: (10, 34), ending: Some((38, 52)), note }
}

/// The frozen section table of the inflection file.
const SECTIONS: &[Section] = &[
    // endingless records (indeclinables, base forms)
    Section { lines: (26, 40), pos: (0, 7), n: (7, 21), form: (7, 21), ending: None, note: "" },
    // first declension
    nominal(63, 85, ""),
    nominal(93, 99, "greek"),
    nominal(103, 113, "greek"),
    nominal(118, 127, "greek"),
    // second declension
    nominal(139, 159, ""),
    nominal(166, 175, ""),
    nominal(183, 186, "er"),
    nominal(194, 201, "ius/ium"),
    nominal(209, 214, "ius/ium"),
    nominal(220, 229, "greek"),
    nominal(236, 245, "greek"),
    nominal(250, 254, "greek"),
    nominal(261, 265, "greek"),
    // third declension
    nominal(279, 299, ""),
    nominal(305, 313, "stem_ends_in_cons"),
    nominal(322, 332, "i-stems_m-f"),
    nominal(339, 347, "i-stems_n"),
    nominal(353, 359, "greek"),
    nominal(363, 373, "greek"),
    nominal(380, 393, "greek"),
    nominal(403, 420, "greek"),
    // fourth declension
    nominal(427, 449, ""),
    nominal(454, 463, "u"),
    nominal(468, 474, "jesus_jesu"),
    // fifth declension
    nominal(479, 498, ""),
    nominal(501, 502, "abbreviation"),
    nominal(504, 505, "not_declined"),
    // adjectives, first/second declension
    nominal(515, 552, ""),
    nominal(558, 581, ""),
    nominal(588, 625, ""),
    nominal(633, 646, "first_and_second"),
    nominal(650, 693, "nullus_alius"),
    nominal(701, 765, "greek"),
    // adjectives, third declension
    nominal(773, 795, ""),
    nominal(801, 812, "two_endings"),
    nominal(817, 828, "three_endings"),
    nominal(834, 846, "greek"),
    // verbs by conjugation
    verbal(857, 1021, ""),
    verbal(1037, 1159, ""),
    verbal(1173, 1301, ""),
    verbal(1311, 1450, "irregular"),
    verbal(1459, 1558, ""),
    verbal(1569, 1678, "like_to_be"),
    verbal(1690, 1856, "eo_ire"),
    verbal(1869, 1936, "volere"),
    verbal(1951, 2083, "defective"),
    verbal(2097, 2137, ""),
    // participles and supine
    Section { lines: (2144, 2618), pos: (0, 5), n: (5, 8), form: (9, 34), ending: Some((38, 51)), note: "participles" },
    Section { lines: (2627, 2630), pos: (0, 7), n: (7, 10), form: (11, 20), ending: Some((24, 30)), note: "supine" },
    // pronouns and numerals
    Section { lines: (2686, 2965), pos: (0, 6), n: (6, 9), form: (10, 17), ending: Some((24, 52)), note: "pronoun" },
    Section { lines: (2971, 3941), pos: (0, 7), n: (7, 10), form: (11, 19), ending: Some((32, 52)), note: "numeral" },
];

/// Byte-safe fixed-width column access; short lines read as empty columns.
fn col(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}

fn col_from(line: &str, start: usize) -> &str {
    line.get(start.min(line.len())..).unwrap_or("")
}

fn pos_tag(file: &'static str, line: usize, tag: &str) -> Result<PartOfSpeech, LexiconError> {
    PartOfSpeech::from_tag(tag)
        .ok_or_else(|| LexiconError::record(file, line, format!("unknown part-of-speech tag {tag:?}")))
}

fn parse_dictionary(text: &str) -> Result<Vec<DictEntry>, LexiconError> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        let orth = col(line, 0, 19).replace("zzz", "-").trim().to_string();
        if orth.is_empty() {
            return Err(LexiconError::record("DICTLINE", lineno, "empty headword"));
        }
        let mut parts = vec![orth.clone()];
        for (a, b) in [(19, 38), (38, 57), (57, 76)] {
            let part = col(line, a, b).replace("zzz", "-").trim().to_string();
            if !part.is_empty() {
                parts.push(part);
            }
        }
        let pos = pos_tag("DICTLINE", lineno, col(line, 76, 83).trim())?;
        let form = col(line, 83, 100).trim().to_string();
        let n = Paradigm::parse(col(line, 83, 87));
        let senses = col_from(line, 109)
            .trim()
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        entries.push(DictEntry { id: lineno as u32, orth, parts, pos, form, n, senses });
    }
    Ok(entries)
}

fn parse_stems(text: &str) -> Result<Vec<Stem>, LexiconError> {
    let mut stems = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        let orth = col(line, 0, 19).trim().to_string();
        if orth.is_empty() {
            return Err(LexiconError::record("STEMLIST", lineno, "empty stem"));
        }
        let pos = pos_tag("STEMLIST", lineno, col(line, 19, 26).trim())?;
        let form = col(line, 26, 45).trim().to_string();
        let n = Paradigm::parse(col(line, 26, 30));
        let wid = col_from(line, 50).trim().parse::<u32>().map_err(|_| {
            LexiconError::record("STEMLIST", lineno, "missing or non-numeric wid")
        })?;
        stems.push(Stem { orth, pos, form, n, wid });
    }
    Ok(stems)
}

fn parse_inflections(text: &str) -> Result<Vec<Infl>, LexiconError> {
    let mut inflections = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") {
            continue;
        }
        // Lines outside every section are block headers.
        let Some(section) = SECTIONS.iter().find(|s| s.lines.0 <= i && i < s.lines.1) else {
            continue;
        };
        let pos = pos_tag("INFLECTS", i + 1, col(line, section.pos.0, section.pos.1).trim())?;
        let n = Paradigm::parse(col(line, section.n.0, section.n.1));
        let form = col(line, section.form.0, section.form.1).trim().to_string();
        let ending = match section.ending {
            Some((a, b)) => col(line, a, b).trim().to_string(),
            None => String::new(),
        };
        inflections.push(Infl { ending, pos, n, form, note: section.note });
    }
    // Shortest endings first; the matcher scans from the long end.
    inflections.sort_by_key(|infl| infl.ending.len());
    Ok(inflections)
}

fn parse_uniques(text: &str) -> Result<Vec<UniqueEntry>, LexiconError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut uniques = Vec::new();
    for (chunk_index, chunk) in lines.chunks(3).enumerate() {
        let lineno = chunk_index * 3 + 1;
        if chunk.len() < 3 {
            return Err(LexiconError::record("UNIQUES", lineno, "truncated three-line record"));
        }
        let orth = chunk[0].trim().to_string();
        if orth.is_empty() {
            return Err(LexiconError::record("UNIQUES", lineno, "empty headword"));
        }
        let rest = chunk[1].trim();
        let (tag, form) = match rest.split_once(char::is_whitespace) {
            Some((tag, form)) => (tag, form.trim_start().trim_end()),
            None => (rest, ""),
        };
        let pos = pos_tag("UNIQUES", lineno + 1, tag)?;
        let senses = vec![chunk[2].trim().to_string()];
        uniques.push(UniqueEntry { orth, pos, form: form.to_string(), senses });
    }
    Ok(uniques)
}

/// The four word lists plus the addon tables, loaded once and read-only.
///
/// Safe to share freely: analysis only ever reads from it, and the id index
/// is built up front.
pub struct Lexicon {
    entries: Vec<DictEntry>,
    stems: Vec<Stem>,
    inflections: Vec<Infl>,
    uniques: Vec<UniqueEntry>,
    addons: AddonTables,
    by_id: FxHashMap<u32, usize>,
}

impl Lexicon {
    /// Builds a lexicon from in-memory file contents.
    pub fn from_strs(
        dictionary: &str,
        stems: &str,
        inflections: &str,
        uniques: &str,
        addons: &str,
    ) -> Result<Lexicon, LexiconError> {
        let entries = parse_dictionary(dictionary)?;
        let stems = parse_stems(stems)?;
        let inflections = parse_inflections(inflections)?;
        let uniques = parse_uniques(uniques)?;
        let addons: AddonTables = serde_json::from_str(addons)?;

        let mut by_id = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            by_id.insert(entry.id, index);
        }
        for stem in &stems {
            if !by_id.contains_key(&stem.wid) {
                return Err(LexiconError::record(
                    "STEMLIST",
                    0,
                    format!("stem {:?} references missing entry id {}", stem.orth, stem.wid),
                ));
            }
        }

        Ok(Lexicon { entries, stems, inflections, uniques, addons, by_id })
    }

    /// Builds the lexicon from the data set embedded in this crate.
    pub fn from_embedded() -> Result<Lexicon, LexiconError> {
        Lexicon::from_strs(DICTLINE, STEMLIST, INFLECTS, UNIQUES, ADDONS)
    }

    /// Loads external files in the legacy formats.
    pub fn from_paths(
        dictionary: &Path,
        stems: &Path,
        inflections: &Path,
        uniques: &Path,
        addons: &Path,
    ) -> Result<Lexicon, LexiconError> {
        let read = |path: &Path| {
            std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
                path: path.display().to_string(),
                source,
            })
        };
        Lexicon::from_strs(&read(dictionary)?, &read(stems)?, &read(inflections)?, &read(uniques)?, &read(addons)?)
    }

    /// The process-wide lexicon built from the embedded data set.
    pub fn shared() -> &'static Lexicon {
        static SHARED: Lazy<Lexicon> =
            Lazy::new(|| Lexicon::from_embedded().expect("embedded lexicon data is well-formed"));
        &SHARED
    }

    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }

    /// All inflections, sorted by ending length, shortest first.
    pub fn inflections(&self) -> &[Infl] {
        &self.inflections
    }

    pub fn uniques(&self) -> &[UniqueEntry] {
        &self.uniques
    }

    pub fn addons(&self) -> &AddonTables {
        &self.addons
    }

    /// Resolves a stem's `wid` to its dictionary entry.
    pub fn entry_by_id(&self, id: u32) -> Option<&DictEntry> {
        self.by_id.get(&id).map(|&index| &self.entries[index])
    }

    /// Convenience accessor used by the reducer.
    pub fn prefixes(&self) -> &[Addon] {
        &self.addons.prefixes
    }

    /// Convenience accessor used by the reducer.
    pub fn suffixes(&self) -> &[Addon] {
        &self.addons.suffixes
    }
}
