use crate::ast::{InterfaceTypeDefinition, InterfaceTypeExtension};
use crate::error::Error;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name, object};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#InterfaceTypeDefinition
///
/// *InterfaceTypeDefinition*:
///     Description? **interface** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
pub(crate) fn interface_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<InterfaceTypeDefinition<'a>, Error> {
    p.trace("interface_type_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Interface)?;
    let name = name::name(p)?;
    let implements = object::implements_interfaces(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let fields = object::fields_definition(p)?;

    Ok(InterfaceTypeDefinition {
        description,
        name,
        implements,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#InterfaceTypeExtension
///
/// *InterfaceTypeExtension*:
///     **extend interface** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition
///     **extend interface** Name ImplementsInterfaces? Directives[Const]
///     **extend interface** Name ImplementsInterfaces
pub(crate) fn interface_type_extension<'a>(
    p: &mut Parser<'a>,
) -> Result<InterfaceTypeExtension<'a>, Error> {
    p.trace("interface_type_extension");

    p.expect_keyword(Keyword::Interface)?;
    let name = name::name(p)?;
    let implements = object::implements_interfaces(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let fields = object::fields_definition(p)?;

    if implements.is_none() && directives.is_none() && fields.is_none() {
        return Err(Error::unexpected(&p.peek()?));
    }

    Ok(InterfaceTypeExtension {
        name,
        implements,
        directives,
        fields,
    })
}
