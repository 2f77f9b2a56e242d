//! Output shaping and grammar-code translation.
//!
//! Analyses leave the cascade carrying raw lexicon codes. This module turns
//! them into the serializable result records: part-of-speech tags become
//! full English terms and the fixed-width form strings become typed grammar
//! objects. A form string that does not fit its expected layout passes
//! through raw rather than failing; an unrecognized code inside a
//! well-shaped form is a hard error, because it means the lexicon itself is
//! corrupt.

use serde::Serialize;

use verba_lexicon::{
    Case, Gender, GrammaticalNumber, Infl, Mood, PartOfSpeech, Tense, Voice,
};

use crate::analysis::{Analysis, Lexeme};
use crate::error::ParseError;

/// Result of analyzing one word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    pub word: String,
    pub defs: Vec<WordDef>,
}

/// One reading of the word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordDef {
    /// Citation forms: the principal parts when the lexeme has them,
    /// otherwise the headword alone.
    pub orth: Vec<String>,
    pub senses: Vec<String>,
    pub infls: Vec<InflDef>,
}

/// One inflection reading attached to a definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflDef {
    pub ending: String,
    pub pos: String,
    pub form: FormDef,
}

/// Typed rendering of a paradigm-slot descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FormDef {
    /// Finite verb form (22-column descriptor).
    Verbal {
        tense: Tense,
        voice: Voice,
        mood: Mood,
        person: u8,
        number: GrammaticalNumber,
    },
    /// Participle form (24-column descriptor).
    Participial {
        declension: Case,
        number: GrammaticalNumber,
        gender: Gender,
        tense: Tense,
        voice: Voice,
    },
    /// Nominal form (three tokens). The legacy field name `declension`
    /// carries the translated case.
    Nominal {
        declension: Case,
        number: GrammaticalNumber,
        gender: Gender,
    },
    /// Fallback for descriptors outside the fixed layouts.
    Raw { form: String },
}

/// Shapes the accumulated analyses into output records.
pub fn render(analyses: Vec<Analysis>, formatted: bool) -> Result<Vec<WordDef>, ParseError> {
    analyses.into_iter().map(|a| render_one(a, formatted)).collect()
}

fn render_one(analysis: Analysis, formatted: bool) -> Result<WordDef, ParseError> {
    let mut infls = Vec::new();
    for stem_match in &analysis.stem_matches {
        for infl in &stem_match.infls {
            let def = infl_def(infl, formatted)?;
            if !infls.contains(&def) {
                infls.push(def);
            }
        }
    }

    let (orth, senses, raw_pos, raw_form) = match &analysis.lexeme {
        Lexeme::Entry(entry) => (
            entry.parts.clone(),
            entry.senses.clone(),
            entry.pos.tag().to_string(),
            entry.form.clone(),
        ),
        Lexeme::Unique(unique) => (
            vec![unique.orth.clone()],
            unique.senses.clone(),
            unique.pos.tag().to_string(),
            unique.form.clone(),
        ),
        Lexeme::Addon { addon, .. } => (
            vec![addon.orth.clone()],
            addon.senses.clone(),
            addon.pos.split_whitespace().next().unwrap_or("X").to_string(),
            addon.display_form().to_string(),
        ),
    };

    if infls.is_empty() {
        // Uniques and addons reach the output without stem evidence; a
        // synthetic record carries their raw paradigm descriptor.
        let tag = PartOfSpeech::from_tag(&raw_pos);
        let pos = match tag {
            Some(pos) => pos_label(pos, formatted),
            None => raw_pos.clone(),
        };
        let form = if formatted {
            translate_form(tag, &raw_form)?
        } else {
            FormDef::Raw { form: raw_form }
        };
        infls.push(InflDef { ending: String::new(), pos, form });
    }

    Ok(WordDef { orth, senses, infls })
}

fn infl_def(infl: &Infl, formatted: bool) -> Result<InflDef, ParseError> {
    let form = if formatted {
        translate_form(Some(infl.pos), &infl.form)?
    } else {
        FormDef::Raw { form: infl.form.clone() }
    };
    Ok(InflDef {
        ending: infl.ending.clone(),
        pos: pos_label(infl.pos, formatted),
        form,
    })
}

fn pos_label(pos: PartOfSpeech, formatted: bool) -> String {
    if formatted {
        pos.english().to_string()
    } else {
        pos.tag().to_string()
    }
}

/// Translates a raw paradigm descriptor according to its POS class.
fn translate_form(pos: Option<PartOfSpeech>, form: &str) -> Result<FormDef, ParseError> {
    match pos {
        Some(PartOfSpeech::Verb) => verbal(form),
        Some(PartOfSpeech::Participle) => participial(form),
        Some(
            PartOfSpeech::Noun
            | PartOfSpeech::Pronoun
            | PartOfSpeech::Adjective
            | PartOfSpeech::Numeral,
        ) => nominal(form),
        _ => Ok(FormDef::Raw { form: form.to_string() }),
    }
}

fn nominal(form: &str) -> Result<FormDef, ParseError> {
    let tokens: Vec<&str> = form.split_whitespace().collect();
    let [case, number, gender] = tokens.as_slice() else {
        return Ok(FormDef::Raw { form: form.to_string() });
    };
    Ok(FormDef::Nominal {
        declension: Case::from_code(case)?,
        number: GrammaticalNumber::from_code(number)?,
        gender: Gender::from_code(gender)?,
    })
}

fn verbal(form: &str) -> Result<FormDef, ParseError> {
    if form.len() != 22 || !form.is_ascii() {
        return Ok(FormDef::Raw { form: form.to_string() });
    }
    let person = form[19..21].trim();
    Ok(FormDef::Verbal {
        tense: Tense::from_code(form[0..6].trim())?,
        voice: Voice::from_code(form[6..14].trim())?,
        mood: Mood::from_code(form[14..19].trim())?,
        person: person
            .parse()
            .map_err(|_| verba_lexicon::CodeError::new("person", person))?,
        number: GrammaticalNumber::from_code(form[21..].trim())?,
    })
}

fn participial(form: &str) -> Result<FormDef, ParseError> {
    if form.len() != 24 || !form.is_ascii() {
        return Ok(FormDef::Raw { form: form.to_string() });
    }
    Ok(FormDef::Participial {
        declension: Case::from_code(form[0..3].trim())?,
        number: GrammaticalNumber::from_code(form[4..5].trim())?,
        gender: Gender::from_code(form[6..7].trim())?,
        tense: Tense::from_code(form[8..13].trim())?,
        voice: Voice::from_code(form[13..21].trim())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verb_descriptor_translates_by_column() {
        let form = verbal("PRES  ACTIVE  IND  3 S").unwrap();
        assert_eq!(
            form,
            FormDef::Verbal {
                tense: Tense::Present,
                voice: Voice::Active,
                mood: Mood::Indicative,
                person: 3,
                number: GrammaticalNumber::Singular,
            }
        );
    }

    #[test]
    fn participle_descriptor_translates_by_column() {
        let form = participial("NOM S M PERF PASSIVE PPL").unwrap();
        assert_eq!(
            form,
            FormDef::Participial {
                declension: Case::Nominative,
                number: GrammaticalNumber::Singular,
                gender: Gender::Masculine,
                tense: Tense::Perfect,
                voice: Voice::Passive,
            }
        );
    }

    #[test]
    fn nominal_descriptor_needs_exactly_three_tokens() {
        let form = nominal("GEN S M").unwrap();
        assert_eq!(
            form,
            FormDef::Nominal {
                declension: Case::Genitive,
                number: GrammaticalNumber::Singular,
                gender: Gender::Masculine,
            }
        );
        assert_eq!(
            nominal("X POS").unwrap(),
            FormDef::Raw { form: "X POS".to_string() }
        );
    }

    #[test]
    fn wrong_width_descriptors_fall_back_to_raw() {
        assert_eq!(
            verbal("PRES ACTIVE IND 3 S").unwrap(),
            FormDef::Raw { form: "PRES ACTIVE IND 3 S".to_string() }
        );
        assert_eq!(
            participial("NOM S M PPL").unwrap(),
            FormDef::Raw { form: "NOM S M PPL".to_string() }
        );
    }

    #[test]
    fn unknown_codes_in_well_shaped_forms_are_errors() {
        // 22 columns, but an impossible tense.
        let err = verbal("QQQQ  ACTIVE  IND  3 S").unwrap_err();
        assert_eq!(err.to_string(), "unknown tense code \"QQQQ\"");

        let err = nominal("QQQ S M").unwrap_err();
        assert_eq!(err.to_string(), "unknown case code \"QQQ\"");
    }

    #[test]
    fn verb_forms_serialize_with_full_terms() {
        let form = verbal("PRES  ACTIVE  IND  3 S").unwrap();
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["tense"], "present");
        assert_eq!(json["voice"], "active");
        assert_eq!(json["mood"], "indicative");
        assert_eq!(json["person"], 3);
        assert_eq!(json["number"], "singular");
    }
}
