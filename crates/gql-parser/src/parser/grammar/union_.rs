use crate::ast::{UnionTypeDefinition, UnionTypeExtension};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::grammar::value::Constness;
use crate::parser::grammar::{description, directive, name};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#UnionTypeDefinition
///
/// *UnionTypeDefinition*:
///     Description? **union** Name Directives[Const]? UnionMemberTypes?
pub(crate) fn union_type_definition<'a>(
    p: &mut Parser<'a>,
) -> Result<UnionTypeDefinition<'a>, Error> {
    p.trace("union_type_definition");

    let description = description::description(p)?;
    p.expect_keyword(Keyword::Union)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let members = union_member_types(p)?;

    Ok(UnionTypeDefinition {
        description,
        name,
        directives,
        members,
    })
}

/// See: https://spec.graphql.org/October2021/#UnionTypeExtension
///
/// *UnionTypeExtension*:
///     **extend union** Name Directives[Const]? UnionMemberTypes
///     **extend union** Name Directives[Const]
pub(crate) fn union_type_extension<'a>(
    p: &mut Parser<'a>,
) -> Result<UnionTypeExtension<'a>, Error> {
    p.trace("union_type_extension");

    p.expect_keyword(Keyword::Union)?;
    let name = name::name(p)?;
    let directives = directive::directives(p, Constness::Const)?;
    let members = union_member_types(p)?;

    if directives.is_none() && members.is_none() {
        return Err(Error::unexpected(&p.peek()?));
    }

    Ok(UnionTypeExtension {
        name,
        directives,
        members,
    })
}

/// See: https://spec.graphql.org/October2021/#UnionMemberTypes
///
/// *UnionMemberTypes*:
///     **= |?** NamedType (**|** NamedType)*
fn union_member_types<'a>(p: &mut Parser<'a>) -> Result<Option<&'a [&'a str]>, Error> {
    if p.expect_optional(TokenKind::Eq)?.is_none() {
        return Ok(None);
    }
    p.delimited_many(TokenKind::Pipe, name::named_type).map(Some)
}

#[cfg(test)]
mod test {
    use crate::ast::{Definition, TypeDefinition, TypeSystemDefinition};
    use crate::{Bump, ErrorKind, Parser};

    #[test]
    fn it_parses_a_union_type_definition() {
        let arena = Bump::new();
        let doc = Parser::new(
            &arena,
            "union SearchResult = Photo | Person | Cat | Dog",
        )
        .parse()
        .unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Union(union))) =
            doc.definitions[0]
        else {
            panic!("expected a union type definition");
        };
        assert_eq!(union.name, "SearchResult");
        assert_eq!(
            union.members,
            Some(&["Photo", "Person", "Cat", "Dog"][..])
        );
    }

    #[test]
    fn it_accepts_a_leading_pipe() {
        let arena = Bump::new();
        let doc = Parser::new(&arena, "union SearchResult = | Photo | Person")
            .parse()
            .unwrap();
        let Definition::TypeSystem(TypeSystemDefinition::Type(TypeDefinition::Union(union))) =
            doc.definitions[0]
        else {
            panic!("expected a union type definition");
        };
        assert_eq!(union.members, Some(&["Photo", "Person"][..]));
    }

    #[test]
    fn it_requires_a_member_after_the_equals_sign() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "union SearchResult =").parse().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }

    #[test]
    fn it_rejects_an_empty_union_extension() {
        let arena = Bump::new();
        let err = Parser::new(&arena, "extend union SearchResult")
            .parse()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    }
}
