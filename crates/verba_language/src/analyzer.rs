//! The analysis cascade.
//!
//! One word flows through: normalization, enclitic splitting, the unique
//! table, ending/stem matching with the dictionary join, and (only when the
//! direct lookup itself found nothing) a reduce pass that peels one
//! derivational prefix and/or suffix and retries. The formatter then shapes
//! whatever accumulated.

use log::debug;
use verba_lexicon::Lexicon;

use crate::analysis::{Analysis, AddonKind};
use crate::enclitic::split_enclitics;
use crate::error::ParseError;
use crate::format::{render, ParseResult};
use crate::joiner::lookup_stems;
use crate::matcher::{match_endings, match_stems};
use crate::normalize::normalize;

/// Lookup direction. Only Latin-to-English analysis is implemented; the
/// reverse direction answers with an empty definition list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    LatinToEnglish,
    EnglishToLatin,
}

/// A Latin morphological analyzer over a loaded [`Lexicon`].
///
/// The analyzer itself is stateless: all lookup tables live in the lexicon,
/// which is shared and read-only, so one analyzer (or many) may serve any
/// number of threads.
pub struct Analyzer<'l> {
    lexicon: &'l Lexicon,
}

impl<'l> Analyzer<'l> {
    pub fn new(lexicon: &'l Lexicon) -> Analyzer<'l> {
        Analyzer { lexicon }
    }

    /// Analyzes one word with the default direction and formatted output.
    pub fn parse(&self, word: &str) -> Result<ParseResult, ParseError> {
        self.parse_with(word, Direction::LatinToEnglish, true)
    }

    /// Analyzes one word.
    ///
    /// With `formatted` off, grammar codes stay raw and no code-translation
    /// error can occur.
    pub fn parse_with(
        &self,
        word: &str,
        direction: Direction,
        formatted: bool,
    ) -> Result<ParseResult, ParseError> {
        let s = normalize(word);
        let analyses = match direction {
            Direction::LatinToEnglish => self.latin_to_english(&s),
            Direction::EnglishToLatin => Vec::new(),
        };
        Ok(ParseResult { word: word.to_string(), defs: render(analyses, formatted)? })
    }

    /// Analyzes every word of a line. Tokens are the non-empty fragments
    /// between single spaces after normalization.
    pub fn parse_line(&self, line: &str) -> Result<Vec<ParseResult>, ParseError> {
        normalize(line)
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| self.parse(token))
            .collect()
    }

    fn latin_to_english(&self, s: &str) -> Vec<Analysis> {
        let (residue, mut out) = split_enclitics(self.lexicon, s);

        // The reduce gate watches the direct lookup alone; the enclitic
        // records already in `out` must not mask an unresolved residue.
        let before_direct = out.len();
        let mut is_unique = false;
        for unique in self.lexicon.uniques() {
            if residue == unique.orth {
                out.push(Analysis::unique(unique.clone()));
                is_unique = true;
            }
        }

        if !is_unique {
            self.find_forms(&residue, false, &mut out);
        }

        if out.len() == before_direct {
            debug!("no direct analysis for {residue:?}, trying reduce");
            out.extend(self.reduce(&residue));
        }
        out
    }

    fn find_forms(&self, s: &str, reduced: bool, out: &mut Vec<Analysis>) {
        let endings = match_endings(self.lexicon, s);
        let stems = match_stems(self.lexicon, s, &endings);
        lookup_stems(self.lexicon, stems, reduced, out);
    }

    /// The fallback pass: peel the first matching derivational prefix, then
    /// the first matching suffix, and retry the cascade on the residue.
    /// A reduce that still finds no dictionary entry is discarded whole,
    /// addon records included.
    fn reduce(&self, s: &str) -> Vec<Analysis> {
        let mut s = s.to_string();
        let mut out = Vec::new();

        for prefix in self.lexicon.prefixes() {
            if !prefix.orth.is_empty() && s.starts_with(&prefix.orth) {
                s.drain(..prefix.orth.len());
                debug!("reduce: stripped prefix {:?}", prefix.orth);
                out.push(Analysis::addon(prefix.clone(), AddonKind::Prefix));
                break;
            }
        }
        for suffix in self.lexicon.suffixes() {
            if !suffix.orth.is_empty() && s.ends_with(&suffix.orth) {
                s.truncate(s.len() - suffix.orth.len());
                debug!("reduce: stripped suffix {:?}", suffix.orth);
                out.push(Analysis::addon(suffix.clone(), AddonKind::Suffix));
                break;
            }
        }

        let before = out.len();
        self.find_forms(&s, true, &mut out);
        if out.len() == before {
            return Vec::new();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer<'static> {
        Analyzer::new(Lexicon::shared())
    }

    #[test]
    fn english_to_latin_is_an_empty_stub() {
        let result = analyzer()
            .parse_with("king", Direction::EnglishToLatin, true)
            .unwrap();
        assert_eq!(result.word, "king");
        assert!(result.defs.is_empty());
    }

    #[test]
    fn unknown_words_yield_empty_defs_without_error() {
        let result = analyzer().parse("xyzzy").unwrap();
        assert!(result.defs.is_empty());
    }

    #[test]
    fn parse_line_drops_empty_tokens() {
        let results = analyzer().parse_line("regis  amatque ").unwrap();
        let words: Vec<&str> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["regis", "amatque"]);
    }

    #[test]
    fn parse_normalizes_before_analysis() {
        let plain = analyzer().parse("regis").unwrap();
        let noisy = analyzer().parse("Regis,").unwrap();
        assert_eq!(plain.defs, noisy.defs);
    }

    #[test]
    fn reduce_failure_discards_addon_records() {
        // "abxyzzy" strips the prefix "ab" but the residue stays unknown,
        // so nothing at all is reported.
        let result = analyzer().parse("abxyzzy").unwrap();
        assert!(result.defs.is_empty());
    }

    #[test]
    fn enclitic_split_does_not_mask_the_reduce_pass() {
        // After "que" is stripped, the residue "incurro" still needs the
        // reducer; the enclitic record alone must not satisfy the gate.
        let result = analyzer().parse("incurroque").unwrap();
        let orths: Vec<&str> = result
            .defs
            .iter()
            .map(|def| def.orth[0].as_str())
            .collect();
        assert_eq!(orths, ["que", "in", "curr"]);
    }
}
