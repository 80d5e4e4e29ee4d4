use std::fmt;

use crate::lexer::TokenKind;

/// A kind-tagged slice of the source text.
///
/// `data` borrows from the original input, so tokens are cheap to copy and
/// concatenating the `data` of every token in emission order reconstructs the
/// source. `index` is the byte offset of the token's first byte.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub(crate) kind: TokenKind,
    pub(crate) data: &'a str,
    pub(crate) index: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, data: &'a str, index: usize) -> Self {
        Self { kind, data, index }
    }

    /// Get the token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get a reference to the token's data.
    pub fn data(&self) -> &'a str {
        self.data
    }

    /// Get the token's index.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.index;
        let end = self.index + self.data.len();

        match self.kind {
            TokenKind::Whitespace
            | TokenKind::Comment
            | TokenKind::Name
            | TokenKind::StringValue
            | TokenKind::Int
            | TokenKind::Float => {
                write!(f, "{}@{}:{} {:?}", self.kind, start, end, self.data)
            }
            _ => write!(f, "{}@{}:{}", self.kind, start, end),
        }
    }
}
