mod keyword;

pub(crate) mod grammar;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::ast::Document;
use crate::error::{Error, ErrorKind};
use crate::lexer::{Lexer, Token, TokenKind};

pub(crate) use keyword::Keyword;

/// Parse GraphQL schemas or queries into an arena-allocated AST.
///
/// The API to parse a query or a schema is the same. Here is an example of
/// parsing a query:
/// ```rust
/// use gql_parser::{Bump, Parser};
///
/// let query = "
/// {
///     animal
///     ...snackSelection
///     ... on Pet {
///       playmates {
///         count
///       }
///     }
/// }
/// ";
/// let arena = Bump::new();
/// let doc = Parser::new(&arena, query).parse().expect("query parses");
/// assert_eq!(doc.definitions.len(), 1);
/// ```
///
/// And here is how you'd parse a schema:
/// ```rust
/// use gql_parser::{Bump, Parser};
///
/// let schema = r#"
/// schema {
///   query: Query
///   mutation: Mutation
/// }
///
/// enum Region {
///   EUROPE
///   AMERICAS
/// }
/// "#;
/// let arena = Bump::new();
/// let doc = Parser::new(&arena, schema).parse().expect("schema parses");
/// assert_eq!(doc.definitions.len(), 2);
/// ```
#[derive(Debug)]
pub struct Parser<'a> {
    arena: &'a Bump,
    lexer: Lexer<'a>,
    /// Store one lookahead token so we don't need to relex things as much.
    current: Option<Token<'a>>,
}

impl<'a> Parser<'a> {
    /// Create a new instance of a parser given an arena and an input string.
    pub fn new(arena: &'a Bump, input: &'a str) -> Self {
        Self {
            arena,
            lexer: Lexer::new(input),
            current: None,
        }
    }

    /// Configure the limit on the number of tokens to parse. If an input
    /// document is too big, parsing will be aborted with
    /// [`ErrorKind::LimitReached`].
    ///
    /// By default, there is no limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.lexer = self.lexer.with_limit(limit);
        self
    }

    /// Parse the input document.
    pub fn parse(mut self) -> Result<Document<'a>, Error> {
        grammar::document::document(&mut self)
    }

    pub(crate) fn arena(&self) -> &'a Bump {
        self.arena
    }

    /// Pull the next non-trivia token from the lexer.
    fn next_token(&mut self) -> Result<Token<'a>, Error> {
        loop {
            let token = self.lexer.read()?;
            if !token.kind().is_trivia() {
                return Ok(token);
            }
        }
    }

    /// The current token, loading one into the lookahead slot if it is
    /// empty.
    pub(crate) fn peek(&mut self) -> Result<Token<'a>, Error> {
        if let Some(token) = self.current {
            return Ok(token);
        }
        let token = self.next_token()?;
        self.current = Some(token);

        Ok(token)
    }

    /// The current token, clearing the lookahead slot.
    pub(crate) fn pop(&mut self) -> Result<Token<'a>, Error> {
        let token = self.peek()?;
        self.current = None;

        Ok(token)
    }

    /// Whether the current token's kind is `kind`.
    pub(crate) fn peek_kind(&mut self, kind: TokenKind) -> Result<bool, Error> {
        Ok(self.peek()?.kind() == kind)
    }

    /// Pop the current token iff its kind is `kind`.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, Error> {
        let token = self.peek()?;
        if token.kind() != kind {
            return Err(Error::unexpected(&token));
        }
        self.pop()
    }

    /// Pop the current token if its kind is `kind`; leave it in place
    /// otherwise.
    pub(crate) fn expect_optional(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, Error> {
        if self.peek_kind(kind)? {
            return Ok(Some(self.pop()?));
        }
        Ok(None)
    }

    /// Pop the current token iff it is a `Name` mapping to `keyword`.
    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token<'a>, Error> {
        let token = self.peek()?;
        if token.kind() != TokenKind::Name {
            return Err(Error::unexpected(&token));
        }
        match Keyword::lookup(token.data()) {
            Some(found) if found == keyword => self.pop(),
            Some(_) => Err(Error::new(
                ErrorKind::UnexpectedKeyword,
                token.data(),
                token.index(),
            )),
            None => Err(Error::new(
                ErrorKind::UnknownKeyword,
                token.data(),
                token.index(),
            )),
        }
    }

    /// Pop the current token if it is a `Name` mapping to `keyword`; leave
    /// it in place otherwise.
    pub(crate) fn expect_optional_keyword(&mut self, keyword: Keyword) -> Result<bool, Error> {
        let token = self.peek()?;
        if token.kind() == TokenKind::Name && Keyword::lookup(token.data()) == Some(keyword) {
            self.pop()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// The first non-trivia token after the lookahead slot, without touching
    /// parser state. Runs the trivia skip on a transient copy of the lexer.
    pub(crate) fn lookahead(&self) -> Result<Token<'a>, Error> {
        let mut lexer = self.lexer.clone();
        loop {
            let token = lexer.read()?;
            if !token.kind().is_trivia() {
                return Ok(token);
            }
        }
    }

    /// Expect `open`, then parse items until `close` is consumed. Produces
    /// at least one item.
    pub(crate) fn many<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<&'a [T], Error> {
        self.expect(open)?;
        let mut items = BumpVec::new_in(self.arena);
        loop {
            items.push(item(self)?);
            if self.expect_optional(close)?.is_some() {
                return Ok(items.into_bump_slice());
            }
        }
    }

    /// `many`, returning `None` when `open` is not present.
    pub(crate) fn optional_many<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        item: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<Option<&'a [T]>, Error> {
        if self.peek_kind(open)? {
            return self.many(open, close, item).map(Some);
        }
        Ok(None)
    }

    /// Expect `open`, then parse items until `close` is consumed. May
    /// produce zero items.
    pub(crate) fn any<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<&'a [T], Error> {
        self.expect(open)?;
        let mut items = BumpVec::new_in(self.arena);
        while self.expect_optional(close)?.is_none() {
            items.push(item(self)?);
        }
        Ok(items.into_bump_slice())
    }

    /// Parse one item, then another for every `delimiter` that follows. The
    /// first item may be prefixed with a lone `delimiter`.
    pub(crate) fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<&'a [T], Error> {
        self.expect_optional(delimiter)?;
        let mut items = BumpVec::new_in(self.arena);
        items.push(item(self)?);
        while self.expect_optional(delimiter)?.is_some() {
            items.push(item(self)?);
        }
        Ok(items.into_bump_slice())
    }

    #[cfg(feature = "debug")]
    pub(crate) fn trace(&self, rule: &str) {
        log::trace!("{rule}: {:?}", self.current);
    }

    #[cfg(not(feature = "debug"))]
    #[inline(always)]
    pub(crate) fn trace(&self, _rule: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast;

    #[test]
    fn it_aborts_parsing_at_the_token_limit() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "{ user { id } }")
            .with_limit(11)
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitReached);
    }

    #[test]
    fn it_parses_within_a_sufficient_token_limit() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, "{ user { id } }")
            .with_limit(12)
            .parse()
            .expect("fits within the limit");
        assert_eq!(doc.definitions.len(), 1);
    }

    #[test]
    fn it_treats_commas_as_trivia() {
        let arena = Bump::new();
        let bare = Parser::new(&arena, "{ user { id name } }").parse().unwrap();
        let with_commas = Parser::new(&arena, "{ user { id, name }, }")
            .parse()
            .unwrap();
        assert_eq!(bare, with_commas);
    }

    #[test]
    fn it_keeps_comments_out_of_the_grammar() {
        let arena = Bump::new();
        let commented = Parser::new(
            &arena,
            "# top comment\n{ user # trailing comment\n { id } }",
        )
        .parse()
        .unwrap();
        let bare = Parser::new(&arena, "{ user { id } }").parse().unwrap();
        assert_eq!(commented, bare);
    }

    #[test]
    fn it_propagates_lexical_errors() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "{ user ± }").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedChar);
    }

    #[test]
    fn it_rejects_trailing_garbage_after_a_definition() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "{ id } ]").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn an_empty_document_has_no_definitions() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, "  # nothing but trivia\n").parse().unwrap();
        assert_eq!(doc, ast::Document { definitions: &[] });
    }
}
