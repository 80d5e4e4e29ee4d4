use crate::ast::{Field, FieldDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{argument, description, directive, input, name, selection, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#Field
///
/// *Field*:
///     Alias? Name Arguments? Directives? SelectionSet?
///
/// An alias is only recognizable after its `:`, so the first name is parsed
/// unconditionally and reinterpreted when a colon follows.
pub(crate) fn field<'a>(p: &mut Parser<'a>) -> Result<Field<'a>, Error> {
    p.trace("field");

    let first = name::name(p)?;
    let (alias, name) = if p.expect_optional(TokenKind::Colon)?.is_some() {
        (Some(first), name::name(p)?)
    } else {
        (None, first)
    };
    let arguments = argument::arguments(p, Constness::NotConst)?;
    let directives = directive::directives(p, Constness::NotConst)?;
    let selection_set = selection::optional_selection_set(p)?;

    Ok(Field {
        alias,
        name,
        arguments,
        directives,
        selection_set,
    })
}

/// See: https://spec.graphql.org/October2021/#FieldDefinition
///
/// *FieldDefinition*:
///     Description? Name ArgumentsDefinition? **:** Type Directives[Const]?
pub(crate) fn field_definition<'a>(p: &mut Parser<'a>) -> Result<FieldDefinition<'a>, Error> {
    p.trace("field_definition");

    let description = description::description(p)?;
    let name = name::name(p)?;
    let arguments = input::arguments_definition(p)?;
    p.expect(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let directives = directive::directives(p, Constness::Const)?;

    Ok(FieldDefinition {
        description,
        name,
        arguments,
        ty,
        directives,
    })
}
