//! Grammatical type definitions.
//!
//! Every short code that appears in the legacy data files is represented by
//! an enum here. Codes are parsed with `from_tag`/`from_code`; the `english`
//! accessors produce the full grammar terms used in formatted output.

use serde::Serialize;

use crate::error::CodeError;

/// Part-of-speech tag carried by dictionary entries, stems, and inflections.
///
/// `Pack` marks the pronoun fragments that combine with packon particles;
/// `Unknown` is the legacy `X` tag ("any / not applicable").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Participle,
    Adjective,
    Adverb,
    Pronoun,
    Numeral,
    Preposition,
    Conjunction,
    Interjection,
    Pack,
    Unknown,
}

impl PartOfSpeech {
    /// Parses a legacy tag ("N", "VPAR", ...). Returns `None` for anything
    /// outside the fixed set.
    pub fn from_tag(tag: &str) -> Option<PartOfSpeech> {
        match tag {
            "N" => Some(PartOfSpeech::Noun),
            "V" => Some(PartOfSpeech::Verb),
            "VPAR" => Some(PartOfSpeech::Participle),
            "ADJ" => Some(PartOfSpeech::Adjective),
            "ADV" => Some(PartOfSpeech::Adverb),
            "PRON" => Some(PartOfSpeech::Pronoun),
            "NUM" => Some(PartOfSpeech::Numeral),
            "PREP" => Some(PartOfSpeech::Preposition),
            "CONJ" => Some(PartOfSpeech::Conjunction),
            "INTERJ" => Some(PartOfSpeech::Interjection),
            "PACK" => Some(PartOfSpeech::Pack),
            "X" => Some(PartOfSpeech::Unknown),
            _ => None,
        }
    }

    /// The legacy tag for this part of speech.
    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "N",
            PartOfSpeech::Verb => "V",
            PartOfSpeech::Participle => "VPAR",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Preposition => "PREP",
            PartOfSpeech::Conjunction => "CONJ",
            PartOfSpeech::Interjection => "INTERJ",
            PartOfSpeech::Pack => "PACK",
            PartOfSpeech::Unknown => "X",
        }
    }

    /// Full English term for formatted output. The two tags without an
    /// established English rendering (`PACK`, `X`) pass through unchanged.
    pub fn english(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Participle => "participle",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Pack => "PACK",
            PartOfSpeech::Unknown => "X",
        }
    }

    /// Agreement check between an inflection and a stem.
    ///
    /// Verbs and participles are interchangeable here: a participle ending
    /// may attach to a verb stem and vice versa. The split into finite verb
    /// vs. participle happens later, once the dictionary entry is known.
    pub fn matches(self, other: PartOfSpeech) -> bool {
        self == other || (self.is_verbal() && other.is_verbal())
    }

    /// True for `V` and `VPAR`.
    pub fn is_verbal(self) -> bool {
        matches!(self, PartOfSpeech::Verb | PartOfSpeech::Participle)
    }
}

/// Declension/conjugation selector pair from the legacy `n` field.
///
/// The first slot is the agreement key between stems and endings; `0` means
/// "applies to any paradigm". The second slot picks the variant within a
/// declension or conjugation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Paradigm(pub i8, pub i8);

impl Paradigm {
    /// The wildcard selector.
    pub const ANY: Paradigm = Paradigm(0, 0);

    /// Reads the leading integer tokens of a legacy form field.
    ///
    /// Non-numeric tokens (degree markers like `POS`, gender letters) and
    /// missing tokens decode to `0`, which doubles as the wildcard.
    pub fn parse(text: &str) -> Paradigm {
        let mut tokens = text.split_whitespace();
        let first = tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0);
        let second = tokens.next().and_then(|t| t.parse().ok()).unwrap_or(0);
        Paradigm(first, second)
    }

    /// True when both slots are the wildcard.
    pub fn is_any(self) -> bool {
        self == Paradigm::ANY
    }
}

/// Grammatical case. The legacy output calls the translated case
/// "declension", and the formatter keeps that field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Vocative,
    Genitive,
    Dative,
    Accusative,
    Ablative,
    Locative,
}

impl Case {
    pub fn from_code(code: &str) -> Result<Case, CodeError> {
        match code {
            "NOM" => Ok(Case::Nominative),
            "VOC" => Ok(Case::Vocative),
            "GEN" => Ok(Case::Genitive),
            "DAT" => Ok(Case::Dative),
            "ACC" => Ok(Case::Accusative),
            "ABL" => Ok(Case::Ablative),
            "LOC" => Ok(Case::Locative),
            _ => Err(CodeError::new("case", code)),
        }
    }
}

/// Grammatical number. `All` is the legacy `X` ("any number"), carried by
/// infinitive rows among others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalNumber {
    Singular,
    Plural,
    All,
}

impl GrammaticalNumber {
    pub fn from_code(code: &str) -> Result<GrammaticalNumber, CodeError> {
        match code {
            "S" => Ok(GrammaticalNumber::Singular),
            "P" => Ok(GrammaticalNumber::Plural),
            "X" => Ok(GrammaticalNumber::All),
            _ => Err(CodeError::new("number", code)),
        }
    }
}

/// Grammatical gender. `Common` covers masculine-or-feminine nouns; `All`
/// is the legacy `X` ("any gender"), frequent on adjective and participle
/// endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Common,
    All,
}

impl Gender {
    pub fn from_code(code: &str) -> Result<Gender, CodeError> {
        match code {
            "M" => Ok(Gender::Masculine),
            "F" => Ok(Gender::Feminine),
            "N" => Ok(Gender::Neuter),
            "C" => Ok(Gender::Common),
            "X" => Ok(Gender::All),
            _ => Err(CodeError::new("gender", code)),
        }
    }
}

/// Verb tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Perfect,
    Pluperfect,
    #[serde(rename = "future perfect")]
    FuturePerfect,
}

impl Tense {
    pub fn from_code(code: &str) -> Result<Tense, CodeError> {
        match code {
            "PRES" => Ok(Tense::Present),
            "IMPF" => Ok(Tense::Imperfect),
            "FUT" => Ok(Tense::Future),
            "PERF" => Ok(Tense::Perfect),
            "PLUP" => Ok(Tense::Pluperfect),
            "FUTP" => Ok(Tense::FuturePerfect),
            _ => Err(CodeError::new("tense", code)),
        }
    }
}

/// Verb voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

impl Voice {
    pub fn from_code(code: &str) -> Result<Voice, CodeError> {
        match code {
            "ACTIVE" => Ok(Voice::Active),
            "PASSIVE" => Ok(Voice::Passive),
            _ => Err(CodeError::new("voice", code)),
        }
    }
}

/// Verb mood. The participle mood code appears on finite-verb paradigm rows
/// only through the kludge sections; the regular participle endings carry
/// their own POS tag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Imperative,
    Infinitive,
    Participle,
}

impl Mood {
    pub fn from_code(code: &str) -> Result<Mood, CodeError> {
        match code {
            "IND" => Ok(Mood::Indicative),
            "SUB" => Ok(Mood::Subjunctive),
            "IMP" => Ok(Mood::Imperative),
            "INF" => Ok(Mood::Infinitive),
            "PPL" => Ok(Mood::Participle),
            _ => Err(CodeError::new("mood", code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_tags_round_trip() {
        for tag in [
            "N", "V", "VPAR", "ADJ", "ADV", "PRON", "NUM", "PREP", "CONJ", "INTERJ", "PACK", "X",
        ] {
            let pos = PartOfSpeech::from_tag(tag).expect(tag);
            assert_eq!(pos.tag(), tag);
        }
        assert_eq!(PartOfSpeech::from_tag("SUPINE"), None);
    }

    #[test]
    fn verb_and_participle_agree_both_ways() {
        assert!(PartOfSpeech::Participle.matches(PartOfSpeech::Verb));
        assert!(PartOfSpeech::Verb.matches(PartOfSpeech::Participle));
        assert!(PartOfSpeech::Noun.matches(PartOfSpeech::Noun));
        assert!(!PartOfSpeech::Noun.matches(PartOfSpeech::Adjective));
    }

    #[test]
    fn paradigm_reads_leading_integers() {
        assert_eq!(Paradigm::parse("3 1 M T"), Paradigm(3, 1));
        assert_eq!(Paradigm::parse("1 1 TRANS"), Paradigm(1, 1));
        assert_eq!(Paradigm::parse("POS"), Paradigm(0, 0));
        assert_eq!(Paradigm::parse(""), Paradigm::ANY);
        assert!(Paradigm::parse("X POS").is_any());
    }

    #[test]
    fn unknown_codes_name_their_table() {
        let err = Case::from_code("QQQ").unwrap_err();
        assert_eq!(err.field, "case");
        assert_eq!(err.code, "QQQ");

        let err = Tense::from_code("AORIST").unwrap_err();
        assert_eq!(err.field, "tense");

        assert_eq!(Gender::from_code("X"), Ok(Gender::All));
        assert!(Gender::from_code("Y").is_err());
    }

    #[test]
    fn grammar_terms_serialize_as_lowercase_words() {
        assert_eq!(serde_json::to_string(&Case::Genitive).unwrap(), "\"genitive\"");
        assert_eq!(
            serde_json::to_string(&Tense::FuturePerfect).unwrap(),
            "\"future perfect\""
        );
        assert_eq!(
            serde_json::to_string(&GrammaticalNumber::Singular).unwrap(),
            "\"singular\""
        );
    }
}
