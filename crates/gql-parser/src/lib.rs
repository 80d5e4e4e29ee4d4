#![doc = include_str!("../README.md")]

pub mod ast;
mod error;
mod lexer;
mod parser;

pub use crate::error::{Error, ErrorKind};
pub use crate::lexer::{Lexer, Token, TokenKind};
pub use crate::parser::Parser;
pub use bumpalo::Bump;

use crate::ast::Document;

/// Parse a GraphQL document with no limit on the number of tokens.
///
/// Every AST node is allocated in `arena` and borrows from `source`; drop
/// the arena to free the whole document at once.
///
/// ## Example
/// ```rust
/// use gql_parser::Bump;
///
/// let arena = Bump::new();
/// let doc = gql_parser::parse(&arena, "{ user { id } }").expect("parses");
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<Document<'a>, Error> {
    Parser::new(arena, source).parse()
}

/// Parse a GraphQL document, aborting with [`ErrorKind::LimitReached`] once
/// the lexer has handed out more than `limit` tokens.
///
/// ## Example
/// ```rust
/// use gql_parser::{Bump, ErrorKind};
///
/// let arena = Bump::new();
/// let err = gql_parser::parse_with_limit(&arena, "{ user { id } }", 11).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::LimitReached);
/// ```
pub fn parse_with_limit<'a>(
    arena: &'a Bump,
    source: &'a str,
    limit: usize,
) -> Result<Document<'a>, Error> {
    Parser::new(arena, source).with_limit(limit).parse()
}
