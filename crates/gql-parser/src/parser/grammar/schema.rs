use crate::ast::{RootOperationTypeDefinition, SchemaDefinition, SchemaExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name, operation};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#SchemaDefinition
///
/// *SchemaDefinition*:
///     Description? **schema** Directives[Const]? **{** RootOperationTypeDefinition+ **}**
pub(crate) fn schema_definition<'a>(p: &mut Parser<'a>) -> Result<SchemaDefinition<'a>, Error> {
    p.trace("schema_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Schema)?;
    let directives = directive::directives(p, Constness::Const)?;
    let root_operations = p.many(
        TokenKind::LCurly,
        TokenKind::RCurly,
        root_operation_type_definition,
    )?;

    Ok(SchemaDefinition {
        description,
        directives,
        root_operations,
    })
}

/// See: https://spec.graphql.org/October2021/#SchemaExtension
///
/// *SchemaExtension*:
///     **extend schema** Directives[Const]? **{** RootOperationTypeDefinition+ **}**
///     **extend schema** Directives[Const]
pub(crate) fn schema_extension<'a>(p: &mut Parser<'a>) -> Result<SchemaExtension<'a>, Error> {
    p.trace("schema_extension");

    p.expect_keyword(Keyword::Schema)?;
    let directives = directive::directives(p, Constness::Const)?;
    let root_operations = p.optional_many(
        TokenKind::LCurly,
        TokenKind::RCurly,
        root_operation_type_definition,
    )?;

    if directives.is_none() && root_operations.is_none() {
        return Err(Error::unexpected(&p.peek()?));
    }

    Ok(SchemaExtension {
        directives,
        root_operations,
    })
}

/// RootOperationTypeDefinition is used in a SchemaDefinition. Not to be
/// confused with OperationDefinition.
///
/// See: https://spec.graphql.org/October2021/#RootOperationTypeDefinition
///
/// *RootOperationTypeDefinition*:
///     OperationType **:** NamedType
fn root_operation_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<RootOperationTypeDefinition<'a>, Error> {
    let operation = operation::operation_type(p)?;
    p.expect(TokenKind::Colon)?;
    let named_type = name::named_type(p)?;

    Ok(RootOperationTypeDefinition {
        operation,
        named_type,
    })
}
