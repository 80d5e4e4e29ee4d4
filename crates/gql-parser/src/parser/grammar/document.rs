use bumpalo::collections::Vec as BumpVec;

use crate::ast::{Definition, Document, ExecutableDefinition, TypeDefinition, TypeSystemDefinition};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::{
    directive, enum_, extensions, fragment, input, interface, object, operation, scalar, schema,
    union_,
};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#Document
///
/// *Document*:
///     Definition*
pub(crate) fn document<'a>(p: &mut Parser<'a>) -> Result<Document<'a>, Error> {
    p.trace("document");

    let mut definitions = BumpVec::new_in(p.arena());
    loop {
        if p.expect_optional(TokenKind::Eof)?.is_some() {
            break;
        }
        definitions.push(definition(p)?);
    }

    Ok(Document {
        definitions: definitions.into_bump_slice(),
    })
}

/// See: https://spec.graphql.org/October2021/#Definition
///
/// *Definition*:
///     ExecutableDefinition
///     TypeSystemDefinition
///     TypeSystemExtension
///
/// A definition may start with a description, in which case the token
/// *after* it selects the production to parse.
fn definition<'a>(p: &mut Parser<'a>) -> Result<Definition<'a>, Error> {
    p.trace("definition");

    let token = p.peek()?;
    let keyword_token = if token.kind() == TokenKind::StringValue {
        p.lookahead()?
    } else {
        token
    };

    let Some(keyword) = Keyword::from_token(&keyword_token) else {
        return Err(match keyword_token.kind() {
            TokenKind::Name => Error::new(
                ErrorKind::UnknownDefinition,
                keyword_token.data(),
                keyword_token.index(),
            ),
            _ => Error::unexpected(&keyword_token),
        });
    };

    match keyword {
        Keyword::Query | Keyword::Mutation | Keyword::Subscription | Keyword::LCurly => {
            let def = operation::operation_definition(p)?;
            Ok(Definition::Executable(ExecutableDefinition::Operation(def)))
        }
        Keyword::Fragment => {
            let def = fragment::fragment_definition(p)?;
            Ok(Definition::Executable(ExecutableDefinition::Fragment(def)))
        }
        Keyword::Schema => {
            let def = schema::schema_definition(p)?;
            Ok(Definition::TypeSystem(TypeSystemDefinition::Schema(def)))
        }
        Keyword::Scalar => {
            let def = scalar::scalar_type_definition(p)?;
            Ok(type_definition(TypeDefinition::Scalar(def)))
        }
        Keyword::Type => {
            let def = object::object_type_definition(p)?;
            Ok(type_definition(TypeDefinition::Object(def)))
        }
        Keyword::Interface => {
            let def = interface::interface_type_definition(p)?;
            Ok(type_definition(TypeDefinition::Interface(def)))
        }
        Keyword::Union => {
            let def = union_::union_type_definition(p)?;
            Ok(type_definition(TypeDefinition::Union(def)))
        }
        Keyword::Enum => {
            let def = enum_::enum_type_definition(p)?;
            Ok(type_definition(TypeDefinition::Enum(def)))
        }
        Keyword::Input => {
            let def = input::input_object_type_definition(p)?;
            Ok(type_definition(TypeDefinition::InputObject(def)))
        }
        Keyword::Directive => {
            let def = directive::directive_definition(p)?;
            Ok(Definition::TypeSystem(TypeSystemDefinition::Directive(def)))
        }
        Keyword::Extend => {
            let extension = extensions::extensions(p)?;
            Ok(Definition::Extension(extension))
        }
        Keyword::Implements | Keyword::On | Keyword::Repeatable => Err(Error::new(
            ErrorKind::UnexpectedKeyword,
            keyword_token.data(),
            keyword_token.index(),
        )),
    }
}

fn type_definition(def: TypeDefinition<'_>) -> Definition<'_> {
    Definition::TypeSystem(TypeSystemDefinition::Type(def))
}

#[cfg(test)]
mod test {
    use crate::ast::{Definition, ExecutableDefinition, TypeSystemDefinition};
    use crate::{Bump, ErrorKind, Parser};

    #[test]
    fn it_parses_mixed_executable_and_type_system_definitions() {
        let input = r#"
query GetUser { user { id } }

"The root query type."
type Query {
  user: User
}

fragment userFields on User {
  id
}
"#;
        let arena = Bump::new();
        let doc = Parser::new(&arena, input).parse().unwrap();

        assert_eq!(doc.definitions.len(), 3);
        assert!(matches!(
            doc.definitions[0],
            Definition::Executable(ExecutableDefinition::Operation(_))
        ));
        assert!(matches!(
            doc.definitions[1],
            Definition::TypeSystem(TypeSystemDefinition::Type(_))
        ));
        assert!(matches!(
            doc.definitions[2],
            Definition::Executable(ExecutableDefinition::Fragment(_))
        ));
    }

    #[test]
    fn it_rejects_a_name_that_is_no_definition() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "garbage type Query { a: Int }")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownDefinition);
        assert_eq!(err.data(), "garbage");
    }

    #[test]
    fn it_rejects_a_keyword_that_is_no_definition() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "on Cat { id }").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedKeyword);
    }

    #[test]
    fn it_dispatches_on_the_token_after_a_description() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, r#""Lone scalar." scalar UUID"#)
            .parse()
            .unwrap();
        assert_eq!(doc.definitions.len(), 1);

        let err = Parser::new(&arena, r#""Dangling description.""#)
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }
}
