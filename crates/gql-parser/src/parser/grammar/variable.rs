use crate::ast::VariableDefinition;
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::{self, Constness};
use crate::parser::grammar::{directive, name, ty};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#VariableDefinitions
///
/// *VariableDefinitions*:
///     **(** VariableDefinition* **)**
pub(crate) fn variable_definitions<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<&'a [VariableDefinition<'a>]>, Error> {
    p.trace("variable_definitions");

    if !p.peek_kind(TokenKind::LParen)? {
        return Ok(None);
    }
    p.any(TokenKind::LParen, TokenKind::RParen, variable_definition)
        .map(Some)
}

/// See: https://spec.graphql.org/October2021/#VariableDefinition
///
/// *VariableDefinition*:
///     Variable **:** Type DefaultValue? Directives[Const]?
fn variable_definition<'a>(p: &mut Parser<'a>) -> Result<VariableDefinition<'a>, Error> {
    p.expect(TokenKind::Dollar)?;
    let variable = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let ty = ty::ty(p)?;
    let default_value = value::default_value(p)?;
    let directives = directive::directives(p, Constness::Const)?;

    Ok(VariableDefinition {
        variable,
        ty,
        default_value,
        directives,
    })
}

#[cfg(test)]
mod test {
    use crate::ast::{
        Definition, ExecutableDefinition, OperationDefinition, Type, Value,
    };
    use crate::{Bump, ErrorKind, Parser};

    fn operation<'a>(arena: &'a Bump, input: &'a str) -> OperationDefinition<'a> {
        let doc = Parser::new(arena, input).parse().unwrap();
        let Definition::Executable(ExecutableDefinition::Operation(op)) = doc.definitions[0]
        else {
            panic!("expected an operation");
        };
        op
    }

    #[test]
    fn it_parses_variable_definitions() {
        let arena = Bump::new();
        let op = operation(
            &arena,
            "query GetUser($id: ID!, $first: Int = 10 @tag) { user }",
        );
        let definitions = op.variable_definitions.unwrap();

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].variable, "id");
        assert_eq!(definitions[0].ty, &Type::NonNull(&Type::Named("ID")));
        assert_eq!(definitions[0].default_value, None);
        assert_eq!(definitions[0].directives, None);

        assert_eq!(definitions[1].variable, "first");
        assert_eq!(definitions[1].ty, &Type::Named("Int"));
        assert_eq!(definitions[1].default_value, Some(&Value::Int("10")));
        assert_eq!(definitions[1].directives.unwrap().len(), 1);
    }

    #[test]
    fn it_accepts_empty_variable_definitions() {
        let arena = Bump::new();
        let op = operation(&arena, "query GetUser() { user }");
        assert_eq!(op.variable_definitions, Some(&[][..]));
    }

    #[test]
    fn it_rejects_a_variable_without_a_dollar_sign() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "query (id: ID) { user }")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
        assert_eq!(err.data(), "id");
    }
}
