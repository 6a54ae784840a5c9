//! Enum-likeness classification.
//!
//! Answers "is this type enum-like, and with which value kind?". The
//! enum-literal flag is set on both an enum's base type and on each
//! member type, so both answer `true` to [`is_enum_like`].

use crate::oracle::queries::union_constituents;
use crate::oracle::{TypeFlags, TypeId, TypeKey, TypeOracle, type_flags};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// The literal-value family an enum-like type's members carry.
///
/// A single non-union type can never be both number- and string-valued;
/// observing both flags at once is a host contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnumKind {
    NonEnum,
    HasNumberValues,
    HasStringValues,
}

/// Internal contract violations.
///
/// These indicate the host type system handed back data this engine
/// cannot model. They abort the analysis run; they are never reported
/// as diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("enum kind queried on a union or intersection type; decompose first")]
    KindOnComposite,
    #[error("enum-like type carries neither a string nor a number literal value")]
    MissingLiteralValue,
    #[error("enum-like type carries both string and number literal values")]
    ConflictingLiteralValue,
}

/// Check if a type is enum-like.
///
/// True for enum base types and enum member types alike.
pub fn is_enum_like(db: &dyn TypeOracle, id: TypeId) -> bool {
    type_flags(db, id).contains(TypeFlags::ENUM_LITERAL)
}

/// Classify a non-union type's enum value kind.
///
/// The input must not be a union or intersection — callers decompose
/// first. Non-enum types classify as [`EnumKind::NonEnum`]; enum-like
/// types must carry exactly one of the two literal-value flags.
pub fn enum_kind(db: &dyn TypeOracle, id: TypeId) -> Result<EnumKind, InvariantError> {
    let flags = type_flags(db, id);
    if flags.intersects(TypeFlags::UNION | TypeFlags::INTERSECTION) {
        return Err(InvariantError::KindOnComposite);
    }
    if !flags.contains(TypeFlags::ENUM_LITERAL) {
        return Ok(EnumKind::NonEnum);
    }
    let string = flags.contains(TypeFlags::STRING_LITERAL);
    let number = flags.contains(TypeFlags::NUMBER_LITERAL);
    match (string, number) {
        (true, false) => Ok(EnumKind::HasStringValues),
        (false, true) => Ok(EnumKind::HasNumberValues),
        (false, false) => Err(InvariantError::MissingLiteralValue),
        (true, true) => Err(InvariantError::ConflictingLiteralValue),
    }
}

/// The set of enum value kinds across a type's union constituents.
///
/// A mixed enum union can show both kinds; non-enum constituents
/// contribute [`EnumKind::NonEnum`]. Never called on intersections.
pub fn enum_kinds(db: &dyn TypeOracle, id: TypeId) -> Result<FxHashSet<EnumKind>, InvariantError> {
    let mut kinds = FxHashSet::default();
    for part in union_constituents(db, id) {
        kinds.insert(enum_kind(db, part)?);
    }
    Ok(kinds)
}

/// Resolve the canonical base (parent) enum type for a member type.
///
/// Non-member types come back unchanged: they are either already a base
/// type or not enum-related at all. Unresolvable parents also come back
/// unchanged (treated as "could not resolve, assume non-enum-specific").
pub fn base_enum_type(db: &dyn TypeOracle, id: TypeId) -> TypeId {
    match db.lookup(id) {
        Some(TypeKey::EnumMember { parent, .. }) => db.enum_type(parent).unwrap_or(id),
        _ => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TypeTable;

    #[test]
    fn enum_likeness_on_base_and_members() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple", "Banana"]);
        assert!(is_enum_like(&table, fruit.base));
        assert!(is_enum_like(&table, fruit.members[0]));
        assert!(!is_enum_like(&table, TypeId::NUMBER));
        let one = table.literal_number(1.0);
        assert!(!is_enum_like(&table, one));
    }

    #[test]
    fn kind_of_number_and_string_enums() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple"]);
        let color = table.register_string_enum("Color", &["Red"]);
        assert_eq!(
            enum_kind(&table, fruit.members[0]),
            Ok(EnumKind::HasNumberValues)
        );
        assert_eq!(
            enum_kind(&table, color.members[0]),
            Ok(EnumKind::HasStringValues)
        );
        assert_eq!(enum_kind(&table, fruit.base), Ok(EnumKind::HasNumberValues));
        assert_eq!(enum_kind(&table, TypeId::STRING), Ok(EnumKind::NonEnum));
    }

    #[test]
    fn kind_rejects_composites() {
        let mut table = TypeTable::new();
        let u = table.union(vec![TypeId::STRING, TypeId::NUMBER]);
        assert_eq!(enum_kind(&table, u), Err(InvariantError::KindOnComposite));
        let i = table.intersection(vec![TypeId::STRING, TypeId::OBJECT]);
        assert_eq!(enum_kind(&table, i), Err(InvariantError::KindOnComposite));
    }

    #[test]
    fn kind_rejects_heterogeneous_base() {
        let mut table = TypeTable::new();
        let zero = table.literal_number(0.0);
        let red = table.literal_string("RED");
        let mixed = table.register_enum("Mixed", &[("Zero", zero), ("Red", red)]);
        assert_eq!(
            enum_kind(&table, mixed.base),
            Err(InvariantError::ConflictingLiteralValue)
        );
        // The members themselves are fine; a lowering presents the
        // heterogeneous enum as a union of them.
        assert_eq!(
            enum_kind(&table, mixed.members[0]),
            Ok(EnumKind::HasNumberValues)
        );
        assert_eq!(
            enum_kind(&table, mixed.members[1]),
            Ok(EnumKind::HasStringValues)
        );
    }

    #[test]
    fn kinds_over_unions() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple"]);
        let color = table.register_string_enum("Color", &["Red"]);
        let mixed = table.union2(fruit.members[0], color.members[0]);
        let kinds = enum_kinds(&table, mixed).unwrap();
        assert!(kinds.contains(&EnumKind::HasNumberValues));
        assert!(kinds.contains(&EnumKind::HasStringValues));
        assert_eq!(kinds.len(), 2);

        let with_null = table.union2(fruit.members[0], TypeId::NULL);
        let kinds = enum_kinds(&table, with_null).unwrap();
        assert!(kinds.contains(&EnumKind::NonEnum));
        assert!(kinds.contains(&EnumKind::HasNumberValues));
    }

    #[test]
    fn base_resolution() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple", "Banana"]);
        assert_eq!(base_enum_type(&table, fruit.members[0]), fruit.base);
        assert_eq!(base_enum_type(&table, fruit.members[1]), fruit.base);
        // Base types and unrelated types resolve to themselves.
        assert_eq!(base_enum_type(&table, fruit.base), fruit.base);
        assert_eq!(base_enum_type(&table, TypeId::STRING), TypeId::STRING);
    }
}
