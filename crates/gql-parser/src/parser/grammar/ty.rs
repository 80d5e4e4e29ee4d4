use crate::ast::Type;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Type
///
/// *Type*:
///     NamedType
///     ListType
///         **[** Type **]**
///     NonNullType
///         NamedType **!**
///         ListType **!**
///
/// At most one `!` is consumed per type, so a `!!` suffix leaves the second
/// `!` for the surrounding production, which rejects it. All intermediate
/// nodes live in the arena; a failure partway through a chain leaves no
/// dangling allocation to clean up.
pub(crate) fn ty<'a>(p: &mut Parser<'a>) -> Result<&'a Type<'a>, Error> {
    p.trace("ty");

    let inner: &Type<'a> = if p.expect_optional(TokenKind::LBracket)?.is_some() {
        let item = ty(p)?;
        p.expect(TokenKind::RBracket)?;
        p.arena().alloc(Type::List(item))
    } else {
        let name = name::name(p)?;
        p.arena().alloc(Type::Named(name))
    };

    if p.expect_optional(TokenKind::Bang)?.is_some() {
        return Ok(p.arena().alloc(Type::NonNull(inner)));
    }

    Ok(inner)
}
