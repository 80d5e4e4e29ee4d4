use crate::lexer::{Token, TokenKind};

/// The closed, case-sensitive dictionary of grammar keywords.
///
/// `LCurly` is a sentinel for the `{` punctuation token so that
/// document-level dispatch can treat the anonymous-operation shorthand like
/// any other definition keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    Directive,
    Enum,
    Extend,
    Fragment,
    Input,
    Interface,
    Type,
    Query,
    Mutation,
    Subscription,
    Scalar,
    Schema,
    Union,
    Implements,
    On,
    Repeatable,
    LCurly,
}

impl Keyword {
    /// Look a keyword up by its source text.
    pub(crate) fn lookup(data: &str) -> Option<Keyword> {
        Some(match data {
            "directive" => Keyword::Directive,
            "enum" => Keyword::Enum,
            "extend" => Keyword::Extend,
            "fragment" => Keyword::Fragment,
            "input" => Keyword::Input,
            "interface" => Keyword::Interface,
            "type" => Keyword::Type,
            "query" => Keyword::Query,
            "mutation" => Keyword::Mutation,
            "subscription" => Keyword::Subscription,
            "scalar" => Keyword::Scalar,
            "schema" => Keyword::Schema,
            "union" => Keyword::Union,
            "implements" => Keyword::Implements,
            "on" => Keyword::On,
            "repeatable" => Keyword::Repeatable,
            _ => return None,
        })
    }

    /// The keyword a token dispatches on: a dictionary entry for a `Name`
    /// token, the sentinel for `{`.
    pub(crate) fn from_token(token: &Token<'_>) -> Option<Keyword> {
        match token.kind() {
            TokenKind::LCurly => Some(Keyword::LCurly),
            TokenKind::Name => Keyword::lookup(token.data()),
            _ => None,
        }
    }
}
