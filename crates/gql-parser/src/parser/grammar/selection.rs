use crate::ast::{Selection, SelectionSet};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::{field, fragment};
use crate::parser::Parser;

/// See: https://spec.graphql.org/October2021/#SelectionSet
///
/// *SelectionSet*:
///     **{** Selection+ **}**
pub(crate) fn selection_set<'a>(p: &mut Parser<'a>) -> Result<SelectionSet<'a>, Error> {
    p.trace("selection_set");

    let selections = p.many(TokenKind::LCurly, TokenKind::RCurly, selection)?;

    Ok(SelectionSet { selections })
}

/// A selection set where the grammar allows none at all, as on a leaf field.
pub(crate) fn optional_selection_set<'a>(
    p: &mut Parser<'a>,
) -> Result<Option<SelectionSet<'a>>, Error> {
    if !p.peek_kind(TokenKind::LCurly)? {
        return Ok(None);
    }
    selection_set(p).map(Some)
}

/// See: https://spec.graphql.org/October2021/#Selection
///
/// *Selection*:
///     Field
///     FragmentSpread
///     InlineFragment
fn selection<'a>(p: &mut Parser<'a>) -> Result<Selection<'a>, Error> {
    let token = p.peek()?;
    match token.kind() {
        TokenKind::Spread => fragment::fragment_spread_or_inline_fragment(p),
        TokenKind::Name => field::field(p).map(Selection::Field),
        _ => Err(Error::unexpected(&token)),
    }
}
