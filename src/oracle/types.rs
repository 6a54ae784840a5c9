//! Core type representation for the oracle layer.
//!
//! Semantic types are opaque `TypeId` handles backed by an interned
//! `TypeKey` table. Interning guarantees that handle equality IS type
//! identity, which is the only equality notion the rule engine is
//! allowed to use ("same enum" checks are reference checks, never
//! structural ones).

use std::hash::{Hash, Hasher};

// =============================================================================
// Handles
// =============================================================================

/// An interned type handle.
///
/// Two `TypeId`s are equal iff they denote the identical type. Well-known
/// intrinsic types have fixed ids so they can be compared without a table
/// lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const ANY: TypeId = TypeId(0);
    pub const UNKNOWN: TypeId = TypeId(1);
    pub const NEVER: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const NULL: TypeId = TypeId(4);
    pub const UNDEFINED: TypeId = TypeId(5);
    pub const STRING: TypeId = TypeId(6);
    pub const NUMBER: TypeId = TypeId(7);
    pub const BOOLEAN: TypeId = TypeId(8);
    pub const SYMBOL: TypeId = TypeId(9);
    /// The `object` keyword type (non-primitive).
    pub const OBJECT: TypeId = TypeId(10);
    pub const ERROR: TypeId = TypeId(11);

    /// Number of pre-interned intrinsic ids.
    pub(crate) const INTRINSIC_COUNT: u32 = 12;

    /// Check if this id is one of the pre-interned intrinsics.
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::INTRINSIC_COUNT
    }
}

/// Identity of a declaration (an enum declaration, a generic container).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DefId(pub u32);

/// An interned identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Atom(pub u32);

/// An interned list of types (union/intersection members, type arguments).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

/// Handle to a function shape (call signature).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShapeId(pub u32);

// =============================================================================
// Intrinsics and literals
// =============================================================================

/// The built-in intrinsic types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Any,
    Unknown,
    Never,
    Void,
    Null,
    Undefined,
    String,
    Number,
    Boolean,
    Symbol,
    /// The `object` keyword (non-primitive).
    Object,
    Error,
}

/// Intrinsics in pre-interned `TypeId` order.
pub(crate) const INTRINSICS: [IntrinsicKind; TypeId::INTRINSIC_COUNT as usize] = [
    IntrinsicKind::Any,
    IntrinsicKind::Unknown,
    IntrinsicKind::Never,
    IntrinsicKind::Void,
    IntrinsicKind::Null,
    IntrinsicKind::Undefined,
    IntrinsicKind::String,
    IntrinsicKind::Number,
    IntrinsicKind::Boolean,
    IntrinsicKind::Symbol,
    IntrinsicKind::Object,
    IntrinsicKind::Error,
];

/// A numeric literal value, hashable by bit pattern so literal number
/// types can be interned.
#[derive(Clone, Copy, Debug)]
pub struct NumberValue(f64);

impl NumberValue {
    pub fn new(value: f64) -> Self {
        NumberValue(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for NumberValue {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for NumberValue {}

impl Hash for NumberValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// A literal type's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(Atom),
    Number(NumberValue),
    Boolean(bool),
}

// =============================================================================
// TypeKey
// =============================================================================

/// Structural key for an interned type.
///
/// `Enum` is the base (parent) type of an enum declaration; `EnumMember`
/// is the nominal wrapper around a member's literal value type. Both
/// carry the enum-literal classification. Heterogeneous enums are
/// represented by the lowering as unions of their member types, so a
/// single `Enum` base is always homogeneous; the classifier treats a
/// mixed base as a host contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// A built-in intrinsic type.
    Intrinsic(IntrinsicKind),
    /// A literal type (`"a"`, `1`, `true`).
    Literal(LiteralValue),
    /// A union of two or more types.
    Union(TypeListId),
    /// An intersection of two or more types.
    Intersection(TypeListId),
    /// The base type of an enum declaration.
    Enum(DefId),
    /// A single enum member; `value` is its literal value type.
    EnumMember { parent: DefId, value: TypeId },
    /// A type parameter with an optional constraint (upper bound).
    TypeParameter { name: Atom, constraint: Option<TypeId> },
    /// A nominal reference to a non-enum declaration (class, interface,
    /// type alias). Used as the `base` of generic applications.
    Ref(DefId),
    /// An array type `T[]`.
    Array(TypeId),
    /// A generic instantiation `Base<Args>`; two applications are the
    /// same container iff their `base` handles are identical.
    Application { base: TypeId, args: TypeListId },
    /// A function type with a resolved call signature.
    Function(FunctionShapeId),
}

// =============================================================================
// Shapes
// =============================================================================

/// A single declared parameter of a call signature.
#[derive(Clone, Debug)]
pub struct ParamInfo {
    pub name: Atom,
    /// The declared parameter type. For rest parameters this is the
    /// array type; the per-argument element type is derived at the
    /// call site.
    pub ty: TypeId,
    pub optional: bool,
    pub rest: bool,
}

/// A resolved call signature.
#[derive(Clone, Debug)]
pub struct FunctionShape {
    pub name: Option<Atom>,
    pub params: Vec<ParamInfo>,
    pub return_type: TypeId,
}

/// A single registered enum member.
#[derive(Clone, Debug)]
pub struct EnumMemberInfo {
    pub name: Atom,
    /// The member's nominal type (`TypeKey::EnumMember`).
    pub member_type: TypeId,
    /// The member's literal value type.
    pub value: TypeId,
}

/// The registered shape of an enum declaration.
#[derive(Clone, Debug)]
pub struct EnumShape {
    pub name: Atom,
    pub members: Vec<EnumMemberInfo>,
}
