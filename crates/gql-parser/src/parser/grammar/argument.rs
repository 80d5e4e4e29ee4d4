use crate::ast::Argument;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::name;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Arguments
///
/// *Arguments[Const]*:
///     **(** Argument[?Const]* **)**
pub(crate) fn arguments<'a>(
    p: &mut Parser<'a>,
    constness: Constness,
) -> Result<Option<&'a [Argument<'a>]>, Error> {
    if !p.peek_kind(TokenKind::LParen)? {
        return Ok(None);
    }
    p.any(TokenKind::LParen, TokenKind::RParen, |p| {
        argument(p, constness)
    })
    .map(Some)
}

/// See: https://spec.graphql.org/October2021/#Argument
///
/// *Argument[Const]*:
///     Name **:** Value[?Const]
fn argument<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Argument<'a>, Error> {
    let name = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let value = value::value(p, constness)?;

    Ok(Argument { name, value })
}
