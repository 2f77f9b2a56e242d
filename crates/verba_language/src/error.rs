//! Analysis errors.

use std::fmt;

use verba_lexicon::CodeError;

/// Error raised by `parse` and friends.
///
/// The cascade itself never fails — a candidate that does not agree is
/// silently dropped — so the only runtime error is a lexicon-integrity
/// problem observed while translating grammar codes for output.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A grammar code in a lexicon record has no translation.
    CodeTranslation(CodeError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::CodeTranslation(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<CodeError> for ParseError {
    fn from(err: CodeError) -> Self {
        ParseError { kind: ParseErrorKind::CodeTranslation(err) }
    }
}
