//! Type flag tests.
//!
//! Flags summarize the facets of a type the rule engine cares about,
//! mirroring the host checker's flag words. They are computed on demand
//! from the structural key; only the top-level type is inspected (a
//! union reports `UNION`, not the union of its members' flags), matching
//! how the host exposes its flag word.

use crate::oracle::db::TypeOracle;
use crate::oracle::types::{IntrinsicKind, LiteralValue, TypeId, TypeKey};
use bitflags::bitflags;

bitflags! {
    /// Facets of a single type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TypeFlags: u32 {
        const ANY             = 1 << 0;
        const UNKNOWN         = 1 << 1;
        const NEVER           = 1 << 2;
        const VOID            = 1 << 3;
        const NULL            = 1 << 4;
        const UNDEFINED       = 1 << 5;
        /// The `string` primitive.
        const STRING          = 1 << 6;
        /// The `number` primitive.
        const NUMBER          = 1 << 7;
        /// The `boolean` primitive.
        const BOOLEAN         = 1 << 8;
        /// The `symbol` primitive.
        const SYMBOL          = 1 << 9;
        /// The `object` keyword type.
        const NON_PRIMITIVE   = 1 << 10;
        const STRING_LITERAL  = 1 << 11;
        const NUMBER_LITERAL  = 1 << 12;
        const BOOLEAN_LITERAL = 1 << 13;
        /// Set on enum base types and enum member types alike.
        const ENUM_LITERAL    = 1 << 14;
        const UNION           = 1 << 15;
        const INTERSECTION    = 1 << 16;
        const TYPE_PARAMETER  = 1 << 17;
        /// Structured object-ish types (arrays, generics, functions,
        /// nominal references). Distinct from `NON_PRIMITIVE`.
        const OBJECT          = 1 << 18;
        const ERROR           = 1 << 19;

        const STRING_LIKE  = Self::STRING.bits() | Self::STRING_LITERAL.bits();
        const NUMBER_LIKE  = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
        const SYMBOL_LIKE  = Self::SYMBOL.bits();
        const NULLISH      = Self::NULL.bits() | Self::UNDEFINED.bits();
    }
}

impl TypeFlags {
    pub fn is_string_like(self) -> bool {
        self.intersects(TypeFlags::STRING_LIKE)
    }

    pub fn is_number_like(self) -> bool {
        self.intersects(TypeFlags::NUMBER_LIKE)
    }
}

fn literal_flags(value: LiteralValue) -> TypeFlags {
    match value {
        LiteralValue::String(_) => TypeFlags::STRING_LITERAL,
        LiteralValue::Number(_) => TypeFlags::NUMBER_LITERAL,
        LiteralValue::Boolean(_) => TypeFlags::BOOLEAN_LITERAL,
    }
}

/// Compute the flag word for a type.
///
/// Unknown handles report empty flags; callers degrade gracefully.
pub fn type_flags(db: &dyn TypeOracle, id: TypeId) -> TypeFlags {
    let Some(key) = db.lookup(id) else {
        return TypeFlags::empty();
    };
    match key {
        TypeKey::Intrinsic(kind) => match kind {
            IntrinsicKind::Any => TypeFlags::ANY,
            IntrinsicKind::Unknown => TypeFlags::UNKNOWN,
            IntrinsicKind::Never => TypeFlags::NEVER,
            IntrinsicKind::Void => TypeFlags::VOID,
            IntrinsicKind::Null => TypeFlags::NULL,
            IntrinsicKind::Undefined => TypeFlags::UNDEFINED,
            IntrinsicKind::String => TypeFlags::STRING,
            IntrinsicKind::Number => TypeFlags::NUMBER,
            IntrinsicKind::Boolean => TypeFlags::BOOLEAN,
            IntrinsicKind::Symbol => TypeFlags::SYMBOL,
            IntrinsicKind::Object => TypeFlags::NON_PRIMITIVE,
            IntrinsicKind::Error => TypeFlags::ERROR,
        },
        TypeKey::Literal(value) => literal_flags(value),
        TypeKey::Union(_) => TypeFlags::UNION,
        TypeKey::Intersection(_) => TypeFlags::INTERSECTION,
        TypeKey::Enum(def) => {
            // The base type carries the enum-literal flag plus the
            // literal-value flags of its (homogeneous) members. A
            // heterogeneous base would show both literal flags, which
            // the classifier rejects as a host contract violation.
            let mut flags = TypeFlags::ENUM_LITERAL;
            if let Some(shape) = db.enum_shape(def) {
                for member in &shape.members {
                    if let Some(TypeKey::Literal(value)) = db.lookup(member.value) {
                        flags |= literal_flags(value);
                    }
                }
            }
            flags
        }
        TypeKey::EnumMember { value, .. } => {
            let mut flags = TypeFlags::ENUM_LITERAL;
            if let Some(TypeKey::Literal(v)) = db.lookup(value) {
                flags |= literal_flags(v);
            }
            flags
        }
        TypeKey::TypeParameter { .. } => TypeFlags::TYPE_PARAMETER,
        TypeKey::Ref(_) | TypeKey::Array(_) | TypeKey::Application { .. } | TypeKey::Function(_) => {
            TypeFlags::OBJECT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::TypeTable;

    #[test]
    fn intrinsic_flags() {
        let table = TypeTable::new();
        assert_eq!(type_flags(&table, TypeId::ANY), TypeFlags::ANY);
        assert_eq!(type_flags(&table, TypeId::NULL), TypeFlags::NULL);
        assert!(type_flags(&table, TypeId::NUMBER).is_number_like());
        assert!(type_flags(&table, TypeId::STRING).is_string_like());
        assert_eq!(
            type_flags(&table, TypeId::OBJECT),
            TypeFlags::NON_PRIMITIVE
        );
    }

    #[test]
    fn literal_flags_are_like_their_primitive() {
        let mut table = TypeTable::new();
        let one = table.literal_number(1.0);
        assert!(type_flags(&table, one).is_number_like());
        assert!(!type_flags(&table, one).is_string_like());
        let s = table.literal_string("x");
        assert!(type_flags(&table, s).is_string_like());
    }

    #[test]
    fn enum_member_carries_enum_literal_and_value_kind() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple"]);
        let flags = type_flags(&table, fruit.members[0]);
        assert!(flags.contains(TypeFlags::ENUM_LITERAL));
        assert!(flags.contains(TypeFlags::NUMBER_LITERAL));
        assert!(!flags.contains(TypeFlags::STRING_LITERAL));

        let base_flags = type_flags(&table, fruit.base);
        assert!(base_flags.contains(TypeFlags::ENUM_LITERAL));
        assert!(base_flags.contains(TypeFlags::NUMBER_LITERAL));
    }

    #[test]
    fn union_reports_only_union_flag() {
        let mut table = TypeTable::new();
        let u = table.union(vec![TypeId::STRING, TypeId::NULL]);
        assert_eq!(type_flags(&table, u), TypeFlags::UNION);
    }
}
