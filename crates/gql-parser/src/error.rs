use std::fmt;

use crate::lexer::Token;

/// The failure taxonomy shared by the lexer and the parser.
///
/// Lexical kinds are produced while scanning tokens, lifecycle kinds by the
/// lexer's limit and finished-state bookkeeping, and syntactic kinds by the
/// grammar procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    // Lexical.
    #[error("unexpected character")]
    UnexpectedChar,
    #[error("unexpected character in token")]
    UnexpectedCharacter,
    #[error("unexpected line terminator in string value")]
    UnexpectedLineTerminator,
    #[error("unexpected end of data")]
    UnexpectedEndOfData,
    #[error("unterminated string value")]
    UnterminatedString,
    #[error("unterminated spread operator, expected `...`")]
    UnterminatedSpreadOperator,
    #[error("unexpected end of data in a float value")]
    UnexpectedEOFInFloat,
    #[error("int values cannot have a leading zero")]
    LeadingZero,
    #[error("unexpected character as a float suffix")]
    UnexpectCharacterAsFloatSuffix,
    #[error("unexpected end of data in a unicode escape sequence")]
    IncompleteUnicode,
    #[error("incomplete unicode escape sequence")]
    IncompleteUnicodeEscapeSequence,

    // Lexer lifecycle.
    #[error("token limit reached, aborting lexing")]
    LimitReached,
    #[error("cannot read from a finished lexer")]
    ReadAfterFinished,
    #[error("cannot push back more than one character")]
    InvalidState,

    // Syntactic.
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("name does not map to a known keyword")]
    UnknownKeyword,
    #[error("expected a definition")]
    UnknownDefinition,
    #[error("unexpected keyword")]
    UnexpectedKeyword,
    #[error("unknown directive location")]
    UnknownDirectiveLocation,
    #[error("enum values cannot be named `true`, `false` or `null`")]
    ReservedEnumValueName,
    #[error("fragments cannot be named `on`")]
    UnexpectedFragmentName,
    #[error("variables are not allowed in a constant value")]
    UnexpectedVariable,
}

/// An `Error` type for operations performed in the lexer and the parser.
///
/// `data` is the source text the error was raised on, usually the token that
/// was found to be lexically or syntactically incorrect, and `index` is where
/// that text begins in the input.
#[derive(Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at index {index}: `{data}`")]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) data: String,
    pub(crate) index: usize,
}

impl Error {
    /// Create a new instance of `Error`.
    pub(crate) fn new<S: Into<String>>(kind: ErrorKind, data: S, index: usize) -> Self {
        Self {
            kind,
            data: data.into(),
            index,
        }
    }

    /// An [`ErrorKind::UnexpectedToken`] raised on `token`.
    pub(crate) fn unexpected(token: &Token<'_>) -> Self {
        Self::new(ErrorKind::UnexpectedToken, token.data(), token.index())
    }

    /// Get the error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get a reference to the error's data. This is usually the token that
    /// was found to be lexically or syntactically incorrect.
    pub fn data(&self) -> &str {
        self.data.as_ref()
    }

    /// Get the error's index. This is where the error begins in a given
    /// input.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this error was caused by hitting the configured token limit.
    pub fn is_limit(&self) -> bool {
        self.kind == ErrorKind::LimitReached
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.index;
        let end = self.index + self.data.len();

        write!(f, "ERROR@{}:{} {:?} {:?}", start, end, self.kind, self.data)
    }
}
