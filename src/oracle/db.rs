//! The type oracle contract.
//!
//! The rule engine never owns type information; it consults an oracle
//! that can decompose types, classify literals, and resolve enum and
//! signature shapes. Everything here is read-only: the engine performs
//! a pure analysis over an already-checked program.

use crate::oracle::types::{
    Atom, DefId, EnumShape, FunctionShape, FunctionShapeId, TypeId, TypeKey, TypeListId,
};
use std::sync::Arc;

/// Read-only access to the host type system.
///
/// Implemented by [`TypeTable`](crate::oracle::TypeTable) for tests and
/// in-process use; a production host binds this to its own checker.
pub trait TypeOracle {
    /// Look up the structural key for a type handle.
    ///
    /// Returns `None` for handles the oracle does not know; callers
    /// degrade to "not enum, not a violation" on `None`.
    fn lookup(&self, id: TypeId) -> Option<TypeKey>;

    /// Resolve an interned type list (union members, type arguments).
    fn type_list(&self, id: TypeListId) -> Arc<[TypeId]>;

    /// Resolve a call signature shape.
    fn function_shape(&self, id: FunctionShapeId) -> Arc<FunctionShape>;

    /// Resolve the registered shape of an enum declaration.
    fn enum_shape(&self, def: DefId) -> Option<Arc<EnumShape>>;

    /// The canonical base type handle for an enum declaration.
    ///
    /// This is the identity used for "same enum" membership tests.
    fn enum_type(&self, def: DefId) -> Option<TypeId>;

    /// Resolve an interned identifier.
    fn resolve_atom(&self, atom: Atom) -> Arc<str>;
}
