//! Type query functions.
//!
//! High-level query functions for inspecting type characteristics
//! through the [`TypeOracle`] contract. Rule code should use these
//! instead of matching on `TypeKey` directly.

use crate::oracle::db::TypeOracle;
use crate::oracle::types::{TypeId, TypeKey};
use smallvec::{SmallVec, smallvec};

/// A short list of constituent types; most unions are small.
pub type TypeList = SmallVec<[TypeId; 8]>;

/// Check if a type is a union type (A | B).
pub fn is_union_type(db: &dyn TypeOracle, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeKey::Union(_)))
}

/// Check if a type is an intersection type (A & B).
pub fn is_intersection_type(db: &dyn TypeOracle, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeKey::Intersection(_)))
}

/// Check if a type is a type parameter.
pub fn is_type_parameter(db: &dyn TypeOracle, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeKey::TypeParameter { .. }))
}

/// Check if a type is an array type (T[]).
pub fn is_array_type(db: &dyn TypeOracle, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeKey::Array(_)))
}

/// Check if a type is a generic instantiation (Base<Args>).
pub fn is_application_type(db: &dyn TypeOracle, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeKey::Application { .. }))
}

/// Check if a type is a generic container instantiation: an array or a
/// parameterized application.
pub fn is_generic_container(db: &dyn TypeOracle, id: TypeId) -> bool {
    is_array_type(db, id) || is_application_type(db, id)
}

/// Check if a type is a function type with a resolved signature.
pub fn is_function_type(db: &dyn TypeOracle, id: TypeId) -> bool {
    matches!(db.lookup(id), Some(TypeKey::Function(_)))
}

/// Decompose a type into its union constituents.
///
/// Non-union types yield a single-element list. Decomposition is one
/// level deep; the table flattens nested unions at interning time.
pub fn union_constituents(db: &dyn TypeOracle, id: TypeId) -> TypeList {
    match db.lookup(id) {
        Some(TypeKey::Union(list)) => db.type_list(list).iter().copied().collect(),
        _ => smallvec![id],
    }
}

/// Check if any union constituent of a type is an intersection.
pub fn has_intersection_constituent(db: &dyn TypeOracle, id: TypeId) -> bool {
    union_constituents(db, id)
        .iter()
        .any(|&part| is_intersection_type(db, part))
}

/// The declared constraint of a type parameter, if any.
pub fn constraint_of(db: &dyn TypeOracle, id: TypeId) -> Option<TypeId> {
    match db.lookup(id) {
        Some(TypeKey::TypeParameter { constraint, .. }) => constraint,
        _ => None,
    }
}

/// Substitute a type parameter with its constraint.
///
/// Unconstrained type parameters (and non-parameters) come back
/// unchanged, so placeholder generics never spuriously match anything.
pub fn resolve_constraint(db: &dyn TypeOracle, id: TypeId) -> TypeId {
    constraint_of(db, id).unwrap_or(id)
}

/// The type-argument list of a generic container instantiation.
///
/// Arrays report their element type as a one-element list.
pub fn container_type_arguments(db: &dyn TypeOracle, id: TypeId) -> Option<TypeList> {
    match db.lookup(id) {
        Some(TypeKey::Array(element)) => Some(smallvec![element]),
        Some(TypeKey::Application { args, .. }) => {
            Some(db.type_list(args).iter().copied().collect())
        }
        _ => None,
    }
}

/// Check whether two generic container instantiations share the same
/// originating container declaration, and if so return both argument
/// lists for pairwise recursion.
///
/// Arrays match arrays; applications match applications with the
/// identical `base` handle. Anything else is not a match.
pub fn matching_container_args(
    db: &dyn TypeOracle,
    left: TypeId,
    right: TypeId,
) -> Option<(TypeList, TypeList)> {
    match (db.lookup(left), db.lookup(right)) {
        (Some(TypeKey::Array(l)), Some(TypeKey::Array(r))) => {
            Some((smallvec![l], smallvec![r]))
        }
        (
            Some(TypeKey::Application {
                base: left_base,
                args: left_args,
            }),
            Some(TypeKey::Application {
                base: right_base,
                args: right_args,
            }),
        ) if left_base == right_base => Some((
            db.type_list(left_args).iter().copied().collect(),
            db.type_list(right_args).iter().copied().collect(),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TypeTable;

    #[test]
    fn union_decomposition() {
        let mut table = TypeTable::new();
        let u = table.union(vec![TypeId::STRING, TypeId::NUMBER]);
        let parts = union_constituents(&table, u);
        assert_eq!(parts.len(), 2);
        assert!(parts.contains(&TypeId::STRING));
        assert!(parts.contains(&TypeId::NUMBER));

        let single = union_constituents(&table, TypeId::BOOLEAN);
        assert_eq!(single.as_slice(), &[TypeId::BOOLEAN]);
    }

    #[test]
    fn intersection_constituent_detection() {
        let mut table = TypeTable::new();
        let inter = table.intersection(vec![TypeId::STRING, TypeId::OBJECT]);
        let u = table.union(vec![inter, TypeId::NUMBER]);
        assert!(has_intersection_constituent(&table, u));
        assert!(!has_intersection_constituent(&table, TypeId::NUMBER));
    }

    #[test]
    fn constraint_resolution() {
        let mut table = TypeTable::new();
        let bounded = table.type_parameter("T", Some(TypeId::STRING));
        let free = table.type_parameter("U", None);
        assert_eq!(resolve_constraint(&table, bounded), TypeId::STRING);
        assert_eq!(resolve_constraint(&table, free), free);
        assert_eq!(resolve_constraint(&table, TypeId::NUMBER), TypeId::NUMBER);
    }

    #[test]
    fn container_matching() {
        let mut table = TypeTable::new();
        let arr_a = table.array(TypeId::STRING);
        let arr_b = table.array(TypeId::NUMBER);
        let (l, r) = matching_container_args(&table, arr_a, arr_b).unwrap();
        assert_eq!(l.as_slice(), &[TypeId::STRING]);
        assert_eq!(r.as_slice(), &[TypeId::NUMBER]);

        let promise = table.container("Promise");
        let set = table.container("Set");
        let p_str = table.application(promise, vec![TypeId::STRING]);
        let p_num = table.application(promise, vec![TypeId::NUMBER]);
        let s_str = table.application(set, vec![TypeId::STRING]);
        assert!(matching_container_args(&table, p_str, p_num).is_some());
        assert!(matching_container_args(&table, p_str, s_str).is_none());
        assert!(matching_container_args(&table, p_str, arr_a).is_none());
    }
}
