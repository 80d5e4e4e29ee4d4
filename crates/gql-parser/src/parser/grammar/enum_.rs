use crate::ast::{EnumTypeDefinition, EnumTypeExtension, EnumValueDefinition};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#EnumTypeDefinition
///
/// *EnumTypeDefinition*:
///     Description? **enum** Name Directives[Const]? EnumValuesDefinition?
pub(crate) fn enum_type_definition<'a>(p: &mut Parser<'a>) -> Result<EnumTypeDefinition<'a>, Error> {
    p.trace("enum_type_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Enum)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let values = enum_values_definition(p)?;

    Ok(EnumTypeDefinition {
        description,
        name,
        directives,
        values,
    })
}

/// See: https://spec.graphql.org/October2021/#EnumTypeExtension
///
/// *EnumTypeExtension*:
///     **extend enum** Name Directives[Const]? EnumValuesDefinition
///     **extend enum** Name Directives[Const]
pub(crate) fn enum_type_extension<'a>(p: &mut Parser<'a>) -> Result<EnumTypeExtension<'a>, Error> {
    p.trace("enum_type_extension");

    p.expect_keyword(Keyword::Enum)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let values = enum_values_definition(p)?;

    if directives.is_none() && values.is_none() {
        return Err(Error::unexpected(&p.peek()?));
    }

    Ok(EnumTypeExtension {
        name,
        directives,
        values,
    })
}

/// See: https://spec.graphql.org/October2021/#EnumValuesDefinition
///
/// *EnumValuesDefinition*:
///     **{** EnumValueDefinition+ **}**
fn enum_values_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<&'a [EnumValueDefinition<'a>]>, Error> {
    p.optional_many(TokenKind::LCurly, TokenKind::RCurly, enum_value_definition)
}

/// See: https://spec.graphql.org/October2021/#EnumValueDefinition
///
/// *EnumValueDefinition*:
///     Description? EnumValue Directives[Const]?
fn enum_value_definition<'a>(p: &mut Parser<'a>) -> Result<EnumValueDefinition<'a>, Error> {
    let description = description::description(p)?;
    let value = enum_value(p)?;
    let directives = directive::directives(p, Constness::Const)?;

    Ok(EnumValueDefinition {
        description,
        value,
        directives,
    })
}

/// See: https://spec.graphql.org/October2021/#EnumValue
///
/// *EnumValue*:
///     Name *but not* **true** *or* **false** *or* **null**
fn enum_value<'a>(p: &mut Parser<'a>) -> Result<&'a str, Error> {
    let token = p.expect(TokenKind::Name)?;
    if matches!(token.data(), "true" | "false" | "null") {
        return Err(Error::new(
            ErrorKind::ReservedEnumValueName,
            token.data(),
            token.index(),
        ));
    }

    Ok(token.data())
}
