use crate::ast::{ObjectField, Value};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::name;
use crate::parser::Parser;

/// Whether the surrounding grammar position permits variables.
///
/// Default values and everything inside a type-system definition are
/// constant; operations and their selection sets are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constness {
    Const,
    NotConst,
}

/// See: https://spec.graphql.org/October2021/#Value
///
/// *Value[Const]*:
///     [~Const] Variable
///     IntValue
///     FloatValue
///     StringValue
///     BooleanValue
///     NullValue
///     EnumValue
///     ListValue[?Const]
///     ObjectValue[?Const]
pub(crate) fn value<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    p.trace("value");

    let token = p.peek()?;
    match token.kind() {
        TokenKind::LBracket => list_value(p, constness),
        TokenKind::LCurly => object_value(p, constness),
        TokenKind::Int => {
            p.pop()?;
            Ok(Value::Int(token.data()))
        }
        TokenKind::Float => {
            p.pop()?;
            Ok(Value::Float(token.data()))
        }
        TokenKind::StringValue => {
            p.pop()?;
            Ok(Value::String(token.data()))
        }
        TokenKind::Name => {
            p.pop()?;
            Ok(match token.data() {
                "true" => Value::Boolean(true),
                "false" => Value::Boolean(false),
                "null" => Value::Null,
                name => Value::Enum(name),
            })
        }
        TokenKind::Dollar => variable(p, constness),
        _ => Err(Error::unexpected(&token)),
    }
}

/// See: https://spec.graphql.org/October2021/#Variable
///
/// *Variable*:
///     **$** Name
fn variable<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    let dollar = p.expect(TokenKind::Dollar)?;
    if constness == Constness::Const {
        let token = p.peek()?;
        return Err(if token.kind() == TokenKind::Name {
            Error::new(ErrorKind::UnexpectedVariable, token.data(), dollar.index())
        } else {
            Error::unexpected(&token)
        });
    }

    Ok(Value::Variable(name::name(p)?))
}

/// See: https://spec.graphql.org/October2021/#ListValue
///
/// *ListValue[Const]*:
///     **[** Value[?Const]* **]**
fn list_value<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    let values = p.any(TokenKind::LBracket, TokenKind::RBracket, |p| {
        value(p, constness)
    })?;

    Ok(Value::List(values))
}

/// See: https://spec.graphql.org/October2021/#ObjectValue
///
/// *ObjectValue[Const]*:
///     **{** ObjectField[?Const]* **}**
fn object_value<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<Value<'a>, Error> {
    let fields = p.any(TokenKind::LCurly, TokenKind::RCurly, |p| {
        object_field(p, constness)
    })?;

    Ok(Value::Object(fields))
}

/// See: https://spec.graphql.org/October2021/#ObjectField
///
/// *ObjectField[Const]*:
///     Name **:** Value[?Const]
fn object_field<'a>(p: &mut Parser<'a>, constness: Constness) -> Result<ObjectField<'a>, Error> {
    let name = name::name(p)?;
    p.expect(TokenKind::Colon)?;
    let value = value(p, constness)?;

    Ok(ObjectField { name, value })
}

/// See: https://spec.graphql.org/October2021/#DefaultValue
///
/// *DefaultValue*:
///     **=** Value[Const]
pub(crate) fn default_value<'a>(p: &mut Parser<'a>) -> Result<Option<&'a Value<'a>>, Error> {
    if p.expect_optional(TokenKind::Eq)?.is_none() {
        return Ok(None);
    }
    let value = value(p, Constness::Const)?;

    Ok(Some(p.arena().alloc(value)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::{Definition, ExecutableDefinition, Selection};
    use crate::{Bump, Parser};

    fn first_argument_value<'a>(arena: &'a Bump, input: &'a str) -> Value<'a> {
        let doc = Parser::new(arena, input).parse().unwrap();
        let Definition::Executable(ExecutableDefinition::Operation(op)) = doc.definitions[0]
        else {
            panic!("expected an operation");
        };
        let Selection::Field(field) = op.selection_set.selections[0] else {
            panic!("expected a field");
        };
        field.arguments.unwrap()[0].value
    }

    #[test]
    fn it_returns_values() {
        let arena = Bump::new();
        let value = first_argument_value(
            &arena,
            r#"{ user(input: { id: 4, size: $size, ratio: 1.34, name: "n", new: true, tags: null, mode: LATEST, keys: ["a", "b"] }) }"#,
        );

        let Value::Object(fields) = value else {
            panic!("expected an object value");
        };
        let values: Vec<(&str, Value)> = fields
            .iter()
            .map(|field| (field.name, field.value))
            .collect();
        assert_eq!(
            values,
            vec![
                ("id", Value::Int("4")),
                ("size", Value::Variable("size")),
                ("ratio", Value::Float("1.34")),
                ("name", Value::String(r#""n""#)),
                ("new", Value::Boolean(true)),
                ("tags", Value::Null),
                ("mode", Value::Enum("LATEST")),
                ("keys", Value::List(&[Value::String(r#""a""#), Value::String(r#""b""#)])),
            ]
        );
    }

    #[test]
    fn it_parses_an_empty_list_and_an_empty_object() {
        let arena = Bump::new();
        assert_eq!(
            first_argument_value(&arena, "{ user(tags: []) }"),
            Value::List(&[])
        );
        assert_eq!(
            first_argument_value(&arena, "{ user(meta: {}) }"),
            Value::Object(&[])
        );
    }

    #[test]
    fn it_rejects_variables_in_const_contexts() {
        let arena = Bump::new();
        for input in [
            "query ($v: Int = $other) { f }",
            "type Query { f(arg: Int = $var): Int }",
            "enum E { A @dir(if: $var) }",
            "schema @core(feature: $f) { query: Query }",
        ] {
            let err = Parser::new(&arena, input).parse().unwrap_err();
            assert_eq!(
                err.kind(),
                crate::ErrorKind::UnexpectedVariable,
                "expected a variable rejection for {input:?}"
            );
        }
    }

    #[test]
    fn it_rejects_a_lone_dollar_in_a_const_context() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "query ($v: Int = $) { f }")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::UnexpectedToken);
    }
}
