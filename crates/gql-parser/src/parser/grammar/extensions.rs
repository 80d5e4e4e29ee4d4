use crate::ast::{TypeExtension, TypeSystemExtension};
use crate::error::{Error, ErrorKind};
use crate::lexer::TokenKind;
use crate::parser::grammar::{enum_, input, interface, object, scalar, schema, union_};
use crate::parser::{Keyword, Parser};

/// See: https://spec.graphql.org/October2021/#TypeSystemExtension
///
/// *TypeSystemExtension*:
///     SchemaExtension
///     TypeExtension
///
/// The keyword following **extend** selects the extension to parse.
pub(crate) fn extensions<'a>(p: &mut Parser<'a>) -> Result<TypeSystemExtension<'a>, Error> {
    p.trace("extensions");

    p.expect_keyword(Keyword::Extend)?;

    let token = p.peek()?;
    if token.kind() != TokenKind::Name {
        return Err(Error::unexpected(&token));
    }
    match Keyword::lookup(token.data()) {
        Some(Keyword::Schema) => schema::schema_extension(p).map(TypeSystemExtension::Schema),
        Some(Keyword::Scalar) => scalar::scalar_type_extension(p)
            .map(|extension| TypeSystemExtension::Type(TypeExtension::Scalar(extension))),
        Some(Keyword::Type) => object::object_type_extension(p)
            .map(|extension| TypeSystemExtension::Type(TypeExtension::Object(extension))),
        Some(Keyword::Interface) => interface::interface_type_extension(p)
            .map(|extension| TypeSystemExtension::Type(TypeExtension::Interface(extension))),
        Some(Keyword::Union) => union_::union_type_extension(p)
            .map(|extension| TypeSystemExtension::Type(TypeExtension::Union(extension))),
        Some(Keyword::Enum) => enum_::enum_type_extension(p)
            .map(|extension| TypeSystemExtension::Type(TypeExtension::Enum(extension))),
        Some(Keyword::Input) => input::input_object_type_extension(p)
            .map(|extension| TypeSystemExtension::Type(TypeExtension::InputObject(extension))),
        Some(_) => Err(Error::new(
            ErrorKind::UnexpectedKeyword,
            token.data(),
            token.index(),
        )),
        None => Err(Error::new(
            ErrorKind::UnknownKeyword,
            token.data(),
            token.index(),
        )),
    }
}
