use crate::ast::{FieldDefinition, ObjectTypeDefinition, ObjectTypeExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, field, name};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#ObjectTypeDefinition
///
/// *ObjectTypeDefinition*:
///     Description? **type** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
pub(crate) fn object_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<ObjectTypeDefinition<'a>, Error> {
    p.trace("object_type_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Type)?;
    let name = name::name(p)?;
    let implements = implements_interfaces(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let fields = fields_definition(p)?;

    Ok(ObjectTypeDefinition {
        description,
        name,
        implements,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#ObjectTypeExtension
///
/// *ObjectTypeExtension*:
///     **extend type** Name ImplementsInterfaces? Directives[Const]? FieldsDefinition
///     **extend type** Name ImplementsInterfaces? Directives[Const]
///     **extend type** Name ImplementsInterfaces
pub(crate) fn object_type_extension<'a>(
    p: &mut Parser<'a>,
) -> Result<ObjectTypeExtension<'a>, Error> {
    p.trace("object_type_extension");

    p.expect_keyword(Keyword::Type)?;
    let name = name::name(p)?;
    let implements = implements_interfaces(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let fields = fields_definition(p)?;

    if implements.is_none() && directives.is_none() && fields.is_none() {
        return Err(Error::unexpected(&p.peek()?));
    }

    Ok(ObjectTypeExtension {
        name,
        implements,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#ImplementsInterfaces
///
/// *ImplementsInterfaces*:
///     **implements &?** NamedType (**&** NamedType)*
pub(crate) fn implements_interfaces<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<&'a [&'a str]>, Error> {
    if !p.expect_optional_keyword(Keyword::Implements)? {
        return Ok(None);
    }
    p.delimited_many(TokenKind::Amp, name::named_type).map(Some)
}

/// See: https://spec.graphql.org/October2021/#FieldsDefinition
///
/// *FieldsDefinition*:
///     **{** FieldDefinition+ **}**
pub(crate) fn fields_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<&'a [FieldDefinition<'a>]>, Error> {
    p.optional_many(TokenKind::LCurly, TokenKind::RCurly, field::field_definition)
}

#[cfg(test)]
mod test {
    use crate::ast::{Definition, Type, TypeDefinition, TypeSystemDefinition};
    use crate::{Bump, ErrorKind, Lexer, Parser};

    #[test]
    fn it_parses_an_object_with_a_block_string_description() {
        let input = "\"\"\"Root query object.\"\"\"\ntype Query { users(): User }\n";
        let arena = Bump::new();

        let (tokens, errors) = Lexer::new(input).lex(&arena);
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 18);

        let doc = Parser::new(&arena, input).parse().unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
            doc.definitions[0]
        else {
            panic!("expected an object type definition");
        };
        assert_eq!(object.description, Some("\"\"\"Root query object.\"\"\""));

        let fields = object.fields.unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "users");
        assert_eq!(fields[0].arguments, Some(&[][..]));
        assert_eq!(fields[0].ty, &Type::Named("User"));
    }

    #[test]
    fn it_parses_implements_interfaces_with_a_leading_amp() {
        let arena = Bump::new();
        let doc = Parser::new(
            &arena,
            "type Business implements & NamedEntity & ValuedEntity { name: String }",
        )
        .parse()
        .unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
            doc.definitions[0]
        else {
            panic!("expected an object type definition");
        };
        assert_eq!(object.implements, Some(&["NamedEntity", "ValuedEntity"][..]));
    }

    #[test]
    fn it_parses_a_bodiless_object_type() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, "type Empty").parse().unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
            doc.definitions[0]
        else {
            panic!("expected an object type definition");
        };
        assert_eq!(object.description, None);
        assert_eq!(object.implements, None);
        assert_eq!(object.directives, None);
        assert_eq!(object.fields, None);
    }

    #[test]
    fn it_requires_at_least_one_field_in_a_body() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "type Empty { }").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn it_requires_an_interface_after_implements() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "type Business implements { name: String }")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.data(), "{");
    }

    #[test]
    fn it_parses_object_type_extensions() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, "extend type Business implements NamedEntity")
            .parse()
            .unwrap();
        assert_eq!(doc.definitions.len(), 1);

        let err = Parser::new(&arena, "extend type Business").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }
}
