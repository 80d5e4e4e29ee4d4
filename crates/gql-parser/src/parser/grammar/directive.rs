use bumpalo::collections::Vec as BumpVec;

use crate::ast::{Directive, DirectiveDefinition, DirectiveLocation};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{argument, description, input, name};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#Directives
///
/// *Directives[Const]*:
///     Directive[?Const]*
pub(crate) fn directives<'a>(
    p: &mut Parser<'a>,
    constness: Constness,
) -> Result<Option<&'a [Directive<'a>]>, Error> {
    p.trace("directives");

    if !p.peek_kind(TokenKind::At)? {
        return Ok(None);
    }
    let mut items = BumpVec::new_in(p.arena());
    while p.peek_kind(TokenKind::At)? {
        items.push(directive(p, constness)?);
    }

    Ok(Some(items.into_bump_slice()))
}

/// See: https://spec.graphql.org/October2021/#Directive
///
/// *Directive[Const]*:
///     **@** Name Arguments[?Const]?
fn directive<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Directive<'a>, Error> {
    p.expect(TokenKind::At)?;
    let name = name::name(p)?;
    let arguments = argument::arguments(p, constness)?;

    Ok(Directive { name, arguments })
}

/// See: https://spec.graphql.org/October2021/#DirectiveDefinition
///
/// *DirectiveDefinition*:
///     Description? **directive @** Name ArgumentsDefinition? **repeatable**? **on** DirectiveLocations
pub(crate) fn directive_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<DirectiveDefinition<'a>, Error> {
    p.trace("directive_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Directive)?;
    p.expect(TokenKind::At)?;
    let name = name::name(p)?;
    let arguments = input::arguments_definition(p)?;
    let repeatable = p.expect_optional_keyword(Keyword::Repeatable)?;
    p.expect_keyword(Keyword::On)?;
    let locations = p.delimited_many(TokenKind::Pipe, directive_location)?;

    Ok(DirectiveDefinition {
        description,
        name,
        arguments,
        repeatable,
        locations,
    })
}

/// See: https://spec.graphql.org/October2021/#DirectiveLocations
///
/// Each location must be one of the 19 fixed location names.
fn directive_location(p: &mut Parser<'_>) -> Result<DirectiveLocation, Error> {
    let token = p.expect(TokenKind::Name)?;
    DirectiveLocation::from_name(token.data()).ok_or_else(|| {
        Error::new(
            ErrorKind::UnknownDirectiveLocation,
            token.data(),
            token.index(),
        )
    })
}

#[cfg(test)]
mod test {
    use crate::ast::{
        Definition, DirectiveLocation, TypeSystemDefinition, Value,
    };
    use crate::{Bump, ErrorKind, Parser};

    #[test]
    fn it_parses_a_directive_definition() {
        let arena = Bump::new();
        let doc = Parser::new(
            &arena,
            r#"directive @deprecated(reason: String = "No longer supported", removeDate: String) on FIELD_DEFINITION | ENUM_VALUE"#,
        )
        .parse()
        .unwrap();

        let Definition::TypeSystem(TypeSystemDefinition::Directive(definition)) =
            doc.definitions[0]
        else {
            panic!("expected a directive definition");
        };

        assert_eq!(definition.name, "deprecated");
        assert!(!definition.repeatable);

        let arguments = definition.arguments.unwrap();
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0].name, "reason");
        assert_eq!(
            arguments[0].default_value,
            Some(&Value::String(r#""No longer supported""#))
        );
        assert_eq!(arguments[1].name, "removeDate");
        assert_eq!(arguments[1].default_value, None);

        assert_eq!(
            definition.locations,
            &[
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::EnumValue,
            ]
        );
    }

    #[test]
    fn it_parses_a_repeatable_directive_with_a_leading_pipe() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, "directive @tag repeatable on | OBJECT | INTERFACE")
            .parse()
            .unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Directive(definition)) =
            doc.definitions[0]
        else {
            panic!("expected a directive definition");
        };
        assert!(definition.repeatable);
        assert_eq!(
            definition.locations,
            &[DirectiveLocation::Object, DirectiveLocation::Interface]
        );
    }

    #[test]
    fn it_rejects_an_unknown_directive_location() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "directive @tag on EVERYWHERE")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownDirectiveLocation);
        assert_eq!(err.data(), "EVERYWHERE");
    }

    #[test]
    fn it_requires_the_on_keyword() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "directive @tag FIELD")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownKeyword);
    }
}
