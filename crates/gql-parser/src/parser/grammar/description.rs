use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Description
///
/// *Description*:
///     StringValue
///
/// The raw lexeme is kept, quotes included; consumers interested in the text
/// of a description unescape and dedent it themselves.
pub(crate) fn description<'a>(p: &mut Parser<'a>) -> Result<Option<&'a str>, Error> {
    Ok(p.expect_optional(TokenKind::StringValue)?
        .map(|token| token.data()))
}
