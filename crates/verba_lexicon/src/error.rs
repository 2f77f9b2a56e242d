//! Error types for lexicon loading and grammar-code translation.

use std::fmt;

/// A short grammar code that no translation table recognizes.
///
/// Carries the table it was looked up in (`field`) and the offending code,
/// because an unknown code almost always means a corrupted lexicon record
/// rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeError {
    /// The translation table consulted ("case", "gender", "tense", ...).
    pub field: &'static str,
    /// The code that failed to translate.
    pub code: String,
}

impl CodeError {
    pub fn new(field: &'static str, code: &str) -> Self {
        CodeError { field, code: code.to_string() }
    }
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} code {:?}", self.field, self.code)
    }
}

impl std::error::Error for CodeError {}

/// Failure while building a [`Lexicon`](crate::Lexicon) from its data files.
#[derive(Debug)]
pub enum LexiconError {
    /// A data file could not be read from disk.
    Io { path: String, source: std::io::Error },
    /// A record did not match the legacy layout.
    Record { file: &'static str, line: usize, reason: String },
    /// The embedded addon document failed to deserialize.
    Addons(serde_json::Error),
}

impl LexiconError {
    pub(crate) fn record(file: &'static str, line: usize, reason: impl Into<String>) -> Self {
        LexiconError::Record { file, line, reason: reason.into() }
    }
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Io { path, source } => {
                write!(f, "failed to read lexicon file {path}: {source}")
            }
            LexiconError::Record { file, line, reason } => {
                write!(f, "malformed {file} record on line {line}: {reason}")
            }
            LexiconError::Addons(err) => write!(f, "malformed addon tables: {err}"),
        }
    }
}

impl std::error::Error for LexiconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LexiconError::Io { source, .. } => Some(source),
            LexiconError::Addons(err) => Some(err),
            LexiconError::Record { .. } => None,
        }
    }
}

impl From<serde_json::Error> for LexiconError {
    fn from(err: serde_json::Error) -> Self {
        LexiconError::Addons(err)
    }
}
