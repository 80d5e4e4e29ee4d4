use crate::ast::{OperationDefinition, OperationType};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{directive, selection, variable};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#OperationDefinition
///
/// *OperationDefinition*:
///     OperationType Name? VariableDefinitions? Directives? SelectionSet
///     SelectionSet
pub(crate) fn operation_definition<'a>(p: &mut Parser<'a>) -> Result<OperationDefinition<'a>, Error> {
    p.trace("operation_definition");

    if p.peek_kind(TokenKind::LCurly)? {
        // Anonymous-query shorthand.
        let selection_set = selection::selection_set(p)?;
        return Ok(OperationDefinition {
            operation: OperationType::Query,
            name: None,
            variable_definitions: None,
            directives: None,
            selection_set,
        });
    }

    let operation = operation_type(p)?;
    let name = if p.peek_kind(TokenKind::Name)? {
        Some(p.pop()?.data())
    } else {
        None
    };
    let variable_definitions = variable::variable_definitions(p)?;
    let directives = directive::directives(p, Constness::NotConst)?;
    let selection_set = selection::selection_set(p)?;

    Ok(OperationDefinition {
        operation,
        name,
        variable_definitions,
        directives,
        selection_set,
    })
}

/// See: https://spec.graphql.org/October2021/#OperationType
///
/// *OperationType*: one of
///     **query** **mutation** **subscription**
pub(crate) fn operation_type(p: &mut Parser<'_>) -> Result<OperationType, Error> {
    let token = p.peek()?;
    if token.kind() != TokenKind::Name {
        return Err(Error::unexpected(&token));
    }

    let operation = match Keyword::lookup(token.data()) {
        Some(Keyword::Query) => OperationType::Query,
        Some(Keyword::Mutation) => OperationType::Mutation,
        Some(Keyword::Subscription) => OperationType::Subscription,
        Some(_) => {
            return Err(Error::new(
                ErrorKind::UnexpectedKeyword,
                token.data(),
                token.index(),
            ))
        }
        None => {
            return Err(Error::new(
                ErrorKind::UnknownKeyword,
                token.data(),
                token.index(),
            ))
        }
    };
    p.pop()?;

    Ok(operation)
}
