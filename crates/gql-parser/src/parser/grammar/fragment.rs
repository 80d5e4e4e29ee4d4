use crate::ast::{FragmentDefinition, FragmentSpread, InlineFragment, Selection};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{directive, name, selection};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#FragmentDefinition
///
/// *FragmentDefinition*:
///     **fragment** FragmentName TypeCondition Directives? SelectionSet
pub(crate) fn fragment_definition<'a>(p: &mut Parser<'a>) -> Result<FragmentDefinition<'a>, Error> {
    p.trace("fragment_definition");

    p.expect_keyword(Keyword::Fragment)?;
    let name = fragment_name(p)?;
    let type_condition = type_condition(p)?;
    let directives = directive::directives(p, Constness::NotConst)?;
    let selection_set = selection::selection_set(p)?;

    Ok(FragmentDefinition {
        name,
        type_condition,
        directives,
        selection_set,
    })
}

/// See: https://spec.graphql.org/October2021/#FragmentSpread
/// See: https://spec.graphql.org/October2021/#InlineFragment
///
/// *FragmentSpread*:
///     **...** FragmentName Directives?
/// *InlineFragment*:
///     **...** TypeCondition? Directives? SelectionSet
///
/// Both start with a spread; a name other than `on` makes it a spread,
/// anything else an inline fragment.
pub(crate) fn fragment_spread_or_inline_fragment<'a>(
    p: &mut Parser<'a>,
) -> Result<Selection<'a>, Error> {
    p.trace("fragment_spread_or_inline_fragment");

    p.expect(TokenKind::Spread)?;

    let token = p.peek()?;
    if token.kind() == TokenKind::Name && Keyword::lookup(token.data()) != Some(Keyword::On) {
        let name = name::name(p)?;
        let directives = directive::directives(p, Constness::NotConst)?;
        return Ok(Selection::FragmentSpread(FragmentSpread {
            name,
            directives,
        }));
    }

    let type_condition = if p.expect_optional_keyword(Keyword::On)? {
        Some(name::named_type(p)?)
    } else {
        None
    };
    let directives = directive::directives(p, Constness::NotConst)?;
    let selection_set = selection::selection_set(p)?;

    Ok(Selection::InlineFragment(InlineFragment {
        type_condition,
        directives,
        selection_set,
    }))
}

/// See: https://spec.graphql.org/October2021/#FragmentName
///
/// *FragmentName*:
///     Name *but not* **on**
fn fragment_name<'a>(p: &mut Parser<'a>) -> Result<&'a str, Error> {
    let token = p.expect(TokenKind::Name)?;
    if token.data() == "on" {
        return Err(Error::new(
            ErrorKind::UnexpectedFragmentName,
            token.data(),
            token.index(),
        ));
    }

    Ok(token.data())
}

/// See: https://spec.graphql.org/October2021/#TypeCondition
///
/// *TypeCondition*:
///     **on** NamedType
fn type_condition<'a>(p: &mut Parser<'a>) -> Result<&'a str, Error> {
    p.expect_keyword(Keyword::On)?;
    name::named_type(p)
}
