//! The GraphQL abstract syntax tree.
//!
//! Every node is allocated in the [`Bump`](bumpalo::Bump) arena handed to the
//! parser, and every string borrows from the original source text, so a
//! parsed [`Document`] is freed in one step by dropping the arena. Nodes are
//! immutable once constructed.
//!
//! Sequences are arena slices (`&[T]`) and recursive references (nested
//! [`Type`]s, nested [`Value`]s) are arena references (`&T`). Optional
//! clauses that were absent from the source are `None`; an empty-but-present
//! clause, such as the `()` in `users(): User`, is `Some` of an empty slice.

/// The top-level unit of a parse: an ordered sequence of definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    pub definitions: &'a [Definition<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Definition<'a> {
    Executable(ExecutableDefinition<'a>),
    TypeSystem(TypeSystemDefinition<'a>),
    Extension(TypeSystemExtension<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutableDefinition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSystemDefinition<'a> {
    Schema(SchemaDefinition<'a>),
    Type(TypeDefinition<'a>),
    Directive(DirectiveDefinition<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSystemExtension<'a> {
    Schema(SchemaExtension<'a>),
    Type(TypeExtension<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeExtension<'a> {
    Scalar(ScalarTypeExtension<'a>),
    Object(ObjectTypeExtension<'a>),
    Interface(InterfaceTypeExtension<'a>),
    Union(UnionTypeExtension<'a>),
    Enum(EnumTypeExtension<'a>),
    InputObject(InputObjectTypeExtension<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDefinition<'a> {
    pub operation: OperationType,
    pub name: Option<&'a str>,
    pub variable_definitions: Option<&'a [VariableDefinition<'a>]>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub selection_set: SelectionSet<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty, brace-delimited sequence of selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSet<'a> {
    pub selections: &'a [Selection<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub alias: Option<&'a str>,
    pub name: &'a str,
    pub arguments: Option<&'a [Argument<'a>]>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub selection_set: Option<SelectionSet<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentSpread<'a> {
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineFragment<'a> {
    pub type_condition: Option<&'a str>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub selection_set: SelectionSet<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentDefinition<'a> {
    pub name: &'a str,
    pub type_condition: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub selection_set: SelectionSet<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableDefinition<'a> {
    pub variable: &'a str,
    pub ty: &'a Type<'a>,
    pub default_value: Option<&'a Value<'a>>,
    pub directives: Option<&'a [Directive<'a>]>,
}

/// A type reference.
///
/// The grammar only lets `NonNull` wrap a named or a list type, never
/// another `NonNull`; the parser rejects inputs that would require it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type<'a> {
    Named(&'a str),
    List(&'a Type<'a>),
    NonNull(&'a Type<'a>),
}

/// An input value.
///
/// `Int`, `Float` and `String` keep the raw source lexeme; string values
/// include their surrounding quotes, and escape sequences are preserved
/// unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Variable(&'a str),
    Int(&'a str),
    Float(&'a str),
    String(&'a str),
    Boolean(bool),
    Null,
    Enum(&'a str),
    List(&'a [Value<'a>]),
    Object(&'a [ObjectField<'a>]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Option<&'a [Argument<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaDefinition<'a> {
    pub description: Option<&'a str>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub root_operations: &'a [RootOperationTypeDefinition<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootOperationTypeDefinition<'a> {
    pub operation: OperationType,
    pub named_type: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub implements: Option<&'a [&'a str]>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub fields: Option<&'a [FieldDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub implements: Option<&'a [&'a str]>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub fields: Option<&'a [FieldDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub members: Option<&'a [&'a str]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub values: Option<&'a [EnumValueDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<&'a str>,
    pub value: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub fields: Option<&'a [InputValueDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub arguments: Option<&'a [InputValueDefinition<'a>]>,
    pub ty: &'a Type<'a>,
    pub directives: Option<&'a [Directive<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValueDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub ty: &'a Type<'a>,
    pub default_value: Option<&'a Value<'a>>,
    pub directives: Option<&'a [Directive<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<&'a str>,
    pub name: &'a str,
    pub arguments: Option<&'a [InputValueDefinition<'a>]>,
    pub repeatable: bool,
    pub locations: &'a [DirectiveLocation],
}

/// The 19 positions a directive may be applied to.
///
/// See: <https://spec.graphql.org/October2021/#DirectiveLocations>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaExtension<'a> {
    pub directives: Option<&'a [Directive<'a>]>,
    pub root_operations: Option<&'a [RootOperationTypeDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarTypeExtension<'a> {
    pub name: &'a str,
    pub directives: &'a [Directive<'a>],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectTypeExtension<'a> {
    pub name: &'a str,
    pub implements: Option<&'a [&'a str]>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub fields: Option<&'a [FieldDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceTypeExtension<'a> {
    pub name: &'a str,
    pub implements: Option<&'a [&'a str]>,
    pub directives: Option<&'a [Directive<'a>]>,
    pub fields: Option<&'a [FieldDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnionTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub members: Option<&'a [&'a str]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub values: Option<&'a [EnumValueDefinition<'a>]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputObjectTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Option<&'a [Directive<'a>]>,
    pub fields: Option<&'a [InputValueDefinition<'a>]>,
}
