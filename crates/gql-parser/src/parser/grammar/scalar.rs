use crate::ast::{ScalarTypeDefinition, ScalarTypeExtension};
use crate::error::Error;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#ScalarTypeDefinition
///
/// *ScalarTypeDefinition*:
///     Description? **scalar** Name Directives[Const]?
pub(crate) fn scalar_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<ScalarTypeDefinition<'a>, Error> {
    p.trace("scalar_type_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Scalar)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;

    Ok(ScalarTypeDefinition {
        description,
        name,
        directives,
    })
}

/// See: https://spec.graphql.org/October2021/#ScalarTypeExtension
///
/// *ScalarTypeExtension*:
///     **extend scalar** Name Directives[Const]
pub(crate) fn scalar_type_extension<'a>(
    p: &mut Parser<'a>,
) -> Result<ScalarTypeExtension<'a>, Error> {
    p.trace("scalar_type_extension");

    p.expect_keyword(Keyword::Scalar)?;
    let name = name::name(p)?;
    let Some(directives) = directive::directives(p, Constness::Const)? else {
        return Err(Error::unexpected(&p.peek()?));
    };

    Ok(ScalarTypeExtension { name, directives })
}
