mod cursor;
mod lookup;
mod token;
mod token_kind;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::error::{Error, ErrorKind};
use cursor::Cursor;

pub use token::Token;
pub use token_kind::TokenKind;

/// Scans GraphQL source text into [`Token`]s.
///
/// The lexer hands out tokens one at a time through its [`Iterator`]
/// implementation (or [`read`], which treats a finished lexer as an error),
/// or drains the whole source in one [`lex`] call. All three modes share the
/// same state; callers choose by invocation.
///
/// An upper bound on the number of tokens can be set with [`with_limit`];
/// once the bound is hit every further token is an
/// [`ErrorKind::LimitReached`] error.
///
/// [`read`]: Lexer::read
/// [`lex`]: Lexer::lex
/// [`with_limit`]: Lexer::with_limit
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    finished: bool,
    count: usize,
    limit: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new instance of `Lexer` with no token limit.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            finished: false,
            count: 0,
            limit: usize::MAX,
        }
    }

    /// Configure the maximum number of tokens this lexer hands out,
    /// preserving its cursor position and finished state.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Like `next`, but reading past the end of the token stream is an
    /// [`ErrorKind::ReadAfterFinished`] error instead of `None`.
    pub fn read(&mut self) -> Result<Token<'a>, Error> {
        match self.next() {
            Some(result) => result,
            None => Err(Error::new(
                ErrorKind::ReadAfterFinished,
                "",
                self.cursor.index(),
            )),
        }
    }

    /// Drain the lexer, gathering every token and every lexing error.
    ///
    /// Lexing errors do not abort the scan; the only errors that do are
    /// [`ErrorKind::LimitReached`], which makes further scanning pointless.
    pub fn lex<'bump>(mut self, arena: &'bump Bump) -> (BumpVec<'bump, Token<'a>>, Vec<Error>) {
        let mut tokens = BumpVec::new_in(arena);
        let mut errors = Vec::new();

        while let Some(result) = self.next() {
            match result {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    let limited = err.is_limit();
                    errors.push(err);
                    if limited {
                        break;
                    }
                }
            }
        }

        (tokens, errors)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if self.count >= self.limit {
            self.finished = true;
            return Some(Err(Error::new(
                ErrorKind::LimitReached,
                "",
                self.cursor.index(),
            )));
        }
        self.count += 1;

        let result = self.cursor.advance();
        if let Some(err) = self.cursor.err.take() {
            return Some(Err(err));
        }
        if let Ok(token) = &result {
            if token.kind() == TokenKind::Eof {
                self.finished = true;
            }
        }

        Some(result)
    }
}
