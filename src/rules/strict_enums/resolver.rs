//! Enum membership resolution.
//!
//! Computes, for an arbitrary semantic type, the set of distinct base
//! enum families it may draw from. The set is keyed by `TypeId`
//! identity — interning makes handle equality the reference equality
//! the membership tests require.

use crate::rules::strict_enums::classifier::{base_enum_type, is_enum_like};
use crate::oracle::queries::{resolve_constraint, union_constituents};
use crate::oracle::{TypeId, TypeOracle};
use rustc_hash::FxHashSet;

/// A set of base enum types, deduplicated by identity.
pub type EnumTypeSet = FxHashSet<TypeId>;

/// Compute the set of distinct base enum types a type is drawn from.
///
/// Union constituents are considered independently; type parameters are
/// substituted with their constraint first, so an unconstrained generic
/// never tests as belonging to any enum family. Non-enum types yield
/// the empty set.
///
/// This operates on the outer type only: recursing into the type
/// arguments of containers is the calling predicate's job.
pub fn enum_types(db: &dyn TypeOracle, id: TypeId) -> EnumTypeSet {
    union_constituents(db, id)
        .iter()
        .map(|&part| resolve_constraint(db, part))
        .filter(|&part| is_enum_like(db, part))
        .map(|part| base_enum_type(db, part))
        .collect()
}

/// Check if a type draws from at least one enum family.
pub fn has_enum_types(db: &dyn TypeOracle, id: TypeId) -> bool {
    !enum_types(db, id).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TypeTable;

    #[test]
    fn non_enum_types_yield_empty_sets() {
        let mut table = TypeTable::new();
        assert!(enum_types(&table, TypeId::NUMBER).is_empty());
        assert!(enum_types(&table, TypeId::ANY).is_empty());
        let one = table.literal_number(1.0);
        assert!(enum_types(&table, one).is_empty());
        let u = table.union(vec![TypeId::STRING, TypeId::NULL]);
        assert!(enum_types(&table, u).is_empty());
        assert!(!has_enum_types(&table, TypeId::STRING));
    }

    #[test]
    fn members_resolve_to_their_base() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple", "Banana"]);
        let set = enum_types(&table, fruit.members[0]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&fruit.base));
        assert!(has_enum_types(&table, fruit.base));
    }

    #[test]
    fn union_across_two_enums_yields_two_families() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple", "Banana"]);
        let color = table.register_string_enum("Color", &["Red"]);
        // Three members drawn from two base enums.
        let u = table.union(vec![fruit.members[0], fruit.members[1], color.members[0]]);
        let set = enum_types(&table, u);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&fruit.base));
        assert!(set.contains(&color.base));
    }

    #[test]
    fn nullable_enum_union_keeps_the_family() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple"]);
        let nullable = table.union2(fruit.base, TypeId::NULL);
        let set = enum_types(&table, nullable);
        assert_eq!(set.len(), 1);
        assert!(set.contains(&fruit.base));
    }

    #[test]
    fn constrained_type_parameter_joins_the_family() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple"]);
        let bounded = table.type_parameter("T", Some(fruit.base));
        let set = enum_types(&table, bounded);
        assert!(set.contains(&fruit.base));
    }

    #[test]
    fn unconstrained_type_parameter_never_matches() {
        let mut table = TypeTable::new();
        let _fruit = table.register_number_enum("Fruit", &["Apple"]);
        let free = table.type_parameter("T", None);
        assert!(enum_types(&table, free).is_empty());
    }

    #[test]
    fn containers_are_not_recursed_here() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple"]);
        let arr = table.array(fruit.base);
        // The resolver looks at the outer type only.
        assert!(enum_types(&table, arr).is_empty());
    }
}
