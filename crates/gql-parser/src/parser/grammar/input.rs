use crate::ast::{InputObjectTypeDefinition, InputObjectTypeExtension, InputValueDefinition};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::grammar::{description, directive, name, ty};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#InputObjectTypeDefinition
///
/// *InputObjectTypeDefinition*:
///     Description? **input** Name Directives[Const]? InputFieldsDefinition?
pub(crate) fn input_object_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<InputObjectTypeDefinition<'a>, Error> {
    p.trace("input_object_type_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Input)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let fields = input_fields_definition(p)?;

    Ok(InputObjectTypeDefinition {
        description,
        name,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#InputObjectTypeExtension
///
/// *InputObjectTypeExtension*:
///     **extend input** Name Directives[Const]? InputFieldsDefinition
///     **extend input** Name Directives[Const]
pub(crate) fn input_object_type_extension<'a>(
    p: &mut Parser<'a>,
) -> Result<InputObjectTypeExtension<'a>, Error> {
    p.trace("input_object_type_extension");

    p.expect_keyword(Keyword::Input)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let fields = input_fields_definition(p)?;

    if directives.is_none() && fields.is_none() {
        return Err(Error::unexpected(&p.peek()?));
    }

    Ok(InputObjectTypeExtension {
        name,
        directives,
        fields,
    })
}

/// See: https://spec.graphql.org/October2021/#InputFieldsDefinition
///
/// *InputFieldsDefinition*:
///     **{** InputValueDefinition+ **}**
fn input_fields_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<&'a [InputValueDefinition<'a>]>, Error> {
    p.optional_many(TokenKind::LCurly, TokenKind::RCurly, input_value_definition)
}

/// See: https://spec.graphql.org/October2021/#ArgumentsDefinition
///
/// *ArgumentsDefinition*:
///     **(** InputValueDefinition* **)**
pub(crate) fn arguments_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<&'a [InputValueDefinition<'a>]>, Error> {
    if !p.peek_kind(TokenKind::LParen)? {
        return Ok(None);
    }
    p.any(TokenKind::LParen, TokenKind::RParen, input_value_definition)
        .map(Some)
}

/// See: https://spec.graphql.org/October2021/#InputValueDefinition
///
/// *InputValueDefinition*:
///     Description? Name **:** Type DefaultValue? Directives[Const]?
pub(crate) fn input_value_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<InputValueDefinition<'a>, Error> {
    p.trace("input_value_definition");

    let description = description::description(p)?;
    let name = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let default_value = value::default_value(p)?;
    let directives = directive::directives(p, Constness::Const)?;

    Ok(InputValueDefinition {
        description,
        name,
        ty,
        default_value,
        directives,
    })
}

#[cfg(test)]
mod test {
    use crate::ast::{Definition, Type, TypeDefinition, TypeSystemDefinition, Value};
    use crate::{Bump, ErrorKind, Parser};

    #[test]
    fn it_parses_an_input_object_type_definition() {
        let arena = Bump::new();
        let doc = Parser::new(
            &arena,
            r#"input Point2D {
  x: Float = 0.0
  y: Float
}"#,
        )
        .parse()
        .unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::InputObject(
            input,
        ))) = doc.definitions[0]
        else {
            panic!("expected an input object type definition");
        };
        assert_eq!(input.name, "Point2D");

        let fields = input.fields.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "x");
        assert_eq!(fields[0].ty, &Type::Named("Float"));
        assert_eq!(fields[0].default_value, Some(&Value::Float("0.0")));
        assert_eq!(fields[1].default_value, None);
    }

    #[test]
    fn it_parses_a_described_input_value() {
        let arena = Bump::new();
        let doc = Parser::new(
            &arena,
            r#"type Query { user("The user's id." id: ID!): User }"#,
        )
        .parse()
        .unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Object(object))) =
            doc.definitions[0]
        else {
            panic!("expected an object type definition");
        };
        let arguments = object.fields.unwrap()[0].arguments.unwrap();
        assert_eq!(arguments[0].description, Some(r#""The user's id.""#));
        assert_eq!(arguments[0].name, "id");
    }

    #[test]
    fn it_rejects_an_empty_input_extension() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "extend input Point2D").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }
}
