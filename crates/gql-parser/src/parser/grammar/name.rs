use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Name
///
/// *Name*:
///     [_A-Za-z][_0-9A-Za-z]*
pub(crate) fn name<'a>(p: &mut Parser<'a>) -> Result<&'a str, Error> {
    Ok(p.expect(TokenKind::Name)?.data())
}

/// See: https://spec.graphql.org/October2021/#NamedType
///
/// *NamedType*:
///     Name
pub(crate) fn named_type<'a>(p: &mut Parser<'a>) -> Result<&'a str, Error> {
    name(p)
}
