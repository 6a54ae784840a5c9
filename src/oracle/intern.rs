//! In-memory type table.
//!
//! `TypeTable` interns `TypeKey` structures into `TypeId` handles so
//! that handle equality is type identity. It is the reference
//! implementation of the [`TypeOracle`] contract and the fixture the
//! test suites build their type worlds with.
//!
//! Benefits of interning:
//! - O(1) type identity (compare `TypeId` values)
//! - each unique structure stored once
//! - sets of types are sets of `u32`s

use crate::oracle::db::TypeOracle;
use crate::oracle::types::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Interning table for types, type lists, identifiers, signatures, and
/// enum shapes.
///
/// Construction goes through `&mut self` builder methods; the
/// [`TypeOracle`] view is read-only.
pub struct TypeTable {
    keys: Vec<TypeKey>,
    dedup: FxHashMap<TypeKey, TypeId>,
    lists: Vec<Arc<[TypeId]>>,
    list_dedup: FxHashMap<Box<[TypeId]>, TypeListId>,
    atoms: Vec<Arc<str>>,
    atom_dedup: FxHashMap<Arc<str>, Atom>,
    functions: Vec<Arc<FunctionShape>>,
    enums: FxHashMap<DefId, EnumEntry>,
    next_def: u32,
}

struct EnumEntry {
    shape: Arc<EnumShape>,
    base: TypeId,
}

/// What `TypeTable::register_enum` hands back: the declaration id, the
/// canonical base type, and the member types in declaration order.
#[derive(Clone, Debug)]
pub struct EnumRegistration {
    pub def: DefId,
    pub base: TypeId,
    pub members: Vec<TypeId>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Create a table with the intrinsic types pre-interned at their
    /// well-known ids.
    pub fn new() -> Self {
        let mut table = TypeTable {
            keys: Vec::with_capacity(64),
            dedup: FxHashMap::default(),
            lists: Vec::new(),
            list_dedup: FxHashMap::default(),
            atoms: Vec::new(),
            atom_dedup: FxHashMap::default(),
            functions: Vec::new(),
            enums: FxHashMap::default(),
            next_def: 0,
        };
        for kind in INTRINSICS {
            let id = TypeId(table.keys.len() as u32);
            let key = TypeKey::Intrinsic(kind);
            table.keys.push(key);
            table.dedup.insert(key, id);
        }
        debug_assert_eq!(table.keys.len() as u32, TypeId::INTRINSIC_COUNT);
        table
    }

    // =========================================================================
    // Interning primitives
    // =========================================================================

    /// Intern a structural key, returning the canonical handle.
    pub fn intern(&mut self, key: TypeKey) -> TypeId {
        if let Some(&id) = self.dedup.get(&key) {
            return id;
        }
        let id = TypeId(self.keys.len() as u32);
        self.keys.push(key);
        self.dedup.insert(key, id);
        id
    }

    /// Intern an identifier.
    pub fn intern_string(&mut self, s: &str) -> Atom {
        if let Some(&atom) = self.atom_dedup.get(s) {
            return atom;
        }
        let atom = Atom(self.atoms.len() as u32);
        let arc: Arc<str> = Arc::from(s);
        self.atoms.push(Arc::clone(&arc));
        self.atom_dedup.insert(arc, atom);
        atom
    }

    fn intern_list(&mut self, items: &[TypeId]) -> TypeListId {
        if let Some(&id) = self.list_dedup.get(items) {
            return id;
        }
        let id = TypeListId(self.lists.len() as u32);
        self.lists.push(items.into());
        self.list_dedup.insert(items.into(), id);
        id
    }

    // =========================================================================
    // Type constructors
    // =========================================================================

    /// Intern a string literal type.
    pub fn literal_string(&mut self, value: &str) -> TypeId {
        let atom = self.intern_string(value);
        self.intern(TypeKey::Literal(LiteralValue::String(atom)))
    }

    /// Intern a number literal type.
    pub fn literal_number(&mut self, value: f64) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Number(NumberValue::new(
            value,
        ))))
    }

    /// Intern a boolean literal type.
    pub fn literal_boolean(&mut self, value: bool) -> TypeId {
        self.intern(TypeKey::Literal(LiteralValue::Boolean(value)))
    }

    /// Build a union type. Nested unions are flattened, duplicates
    /// dropped, `never` members removed, and `any` absorbs the whole
    /// union. Single-member unions collapse to the member.
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        let mut flat: Vec<TypeId> = Vec::with_capacity(members.len());
        for member in members {
            if member == TypeId::ANY {
                return TypeId::ANY;
            }
            if member == TypeId::NEVER {
                continue;
            }
            match self.lookup(member) {
                Some(TypeKey::Union(list)) => {
                    for inner in self.type_list(list).iter() {
                        if !flat.contains(inner) {
                            flat.push(*inner);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }
        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => {
                let list = self.intern_list(&flat);
                self.intern(TypeKey::Union(list))
            }
        }
    }

    /// Build a two-member union.
    pub fn union2(&mut self, left: TypeId, right: TypeId) -> TypeId {
        self.union(vec![left, right])
    }

    /// Build an intersection type. Single-member intersections collapse
    /// to the member; no further normalization is attempted here.
    pub fn intersection(&mut self, members: Vec<TypeId>) -> TypeId {
        let mut dedup: Vec<TypeId> = Vec::with_capacity(members.len());
        for member in members {
            if !dedup.contains(&member) {
                dedup.push(member);
            }
        }
        match dedup.len() {
            0 => TypeId::UNKNOWN,
            1 => dedup[0],
            _ => {
                let list = self.intern_list(&dedup);
                self.intern(TypeKey::Intersection(list))
            }
        }
    }

    /// Build an array type `T[]`.
    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(TypeKey::Array(element))
    }

    /// Build a generic instantiation `Base<Args>`.
    pub fn application(&mut self, base: TypeId, args: Vec<TypeId>) -> TypeId {
        let list = self.intern_list(&args);
        self.intern(TypeKey::Application { base, args: list })
    }

    /// A nominal handle for a generic container declaration, usable as
    /// the `base` of [`TypeTable::application`].
    pub fn container(&mut self, name: &str) -> TypeId {
        let _ = self.intern_string(name);
        let def = self.fresh_def();
        self.intern(TypeKey::Ref(def))
    }

    /// Build a type parameter, optionally constrained.
    pub fn type_parameter(&mut self, name: &str, constraint: Option<TypeId>) -> TypeId {
        let atom = self.intern_string(name);
        self.intern(TypeKey::TypeParameter {
            name: atom,
            constraint,
        })
    }

    /// Register a call signature and intern its function type.
    pub fn function(&mut self, shape: FunctionShape) -> TypeId {
        let id = FunctionShapeId(self.functions.len() as u32);
        self.functions.push(Arc::new(shape));
        self.intern(TypeKey::Function(id))
    }

    /// Convenience: a signature taking the given parameter types.
    pub fn simple_function(&mut self, param_types: &[TypeId], return_type: TypeId) -> TypeId {
        let params = param_types
            .iter()
            .enumerate()
            .map(|(i, &ty)| ParamInfo {
                name: self.intern_string(&format!("p{i}")),
                ty,
                optional: false,
                rest: false,
            })
            .collect();
        self.function(FunctionShape {
            name: None,
            params,
            return_type,
        })
    }

    fn fresh_def(&mut self) -> DefId {
        let def = DefId(self.next_def);
        self.next_def += 1;
        def
    }

    // =========================================================================
    // Enum registration
    // =========================================================================

    /// Register an enum declaration from member names and literal value
    /// types. Produces the base type, the nominal member types, and the
    /// shape used by kind classification.
    pub fn register_enum(&mut self, name: &str, members: &[(&str, TypeId)]) -> EnumRegistration {
        let def = self.fresh_def();
        let base = self.intern(TypeKey::Enum(def));
        let enum_name = self.intern_string(name);
        let mut infos = Vec::with_capacity(members.len());
        let mut member_types = Vec::with_capacity(members.len());
        for (member_name, value) in members {
            let member_type = self.intern(TypeKey::EnumMember {
                parent: def,
                value: *value,
            });
            infos.push(EnumMemberInfo {
                name: self.intern_string(member_name),
                member_type,
                value: *value,
            });
            member_types.push(member_type);
        }
        self.enums.insert(
            def,
            EnumEntry {
                shape: Arc::new(EnumShape {
                    name: enum_name,
                    members: infos,
                }),
                base,
            },
        );
        EnumRegistration {
            def,
            base,
            members: member_types,
        }
    }

    /// Register a numeric enum with auto-assigned values `0..n`.
    pub fn register_number_enum(&mut self, name: &str, member_names: &[&str]) -> EnumRegistration {
        let values: Vec<(String, TypeId)> = member_names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.to_string(), self.literal_number(i as f64)))
            .collect();
        let members: Vec<(&str, TypeId)> =
            values.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        self.register_enum(name, &members)
    }

    /// Register a string enum whose member values are the member names.
    pub fn register_string_enum(&mut self, name: &str, member_names: &[&str]) -> EnumRegistration {
        let values: Vec<(String, TypeId)> = member_names
            .iter()
            .map(|n| (n.to_string(), self.literal_string(n)))
            .collect();
        let members: Vec<(&str, TypeId)> =
            values.iter().map(|(n, v)| (n.as_str(), *v)).collect();
        self.register_enum(name, &members)
    }
}

impl TypeOracle for TypeTable {
    fn lookup(&self, id: TypeId) -> Option<TypeKey> {
        self.keys.get(id.0 as usize).copied()
    }

    fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        Arc::clone(&self.lists[id.0 as usize])
    }

    fn function_shape(&self, id: FunctionShapeId) -> Arc<FunctionShape> {
        Arc::clone(&self.functions[id.0 as usize])
    }

    fn enum_shape(&self, def: DefId) -> Option<Arc<EnumShape>> {
        self.enums.get(&def).map(|entry| Arc::clone(&entry.shape))
    }

    fn enum_type(&self, def: DefId) -> Option<TypeId> {
        self.enums.get(&def).map(|entry| entry.base)
    }

    fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        Arc::clone(&self.atoms[atom.0 as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_identity() {
        let mut table = TypeTable::new();
        let one_a = table.literal_number(1.0);
        let one_b = table.literal_number(1.0);
        assert_eq!(one_a, one_b);

        let s_a = table.literal_string("RED");
        let s_b = table.literal_string("RED");
        assert_eq!(s_a, s_b);
        assert_ne!(one_a, s_a);
    }

    #[test]
    fn union_flattens_and_dedups() {
        let mut table = TypeTable::new();
        let one = table.literal_number(1.0);
        let two = table.literal_number(2.0);
        let inner = table.union(vec![one, two]);
        let outer = table.union(vec![inner, one]);
        assert_eq!(outer, inner, "flattening should reuse the inner union");
    }

    #[test]
    fn union_any_absorbs() {
        let mut table = TypeTable::new();
        let u = table.union(vec![TypeId::ANY, TypeId::STRING]);
        assert_eq!(u, TypeId::ANY);
    }

    #[test]
    fn union_drops_never_and_collapses_singleton() {
        let mut table = TypeTable::new();
        let u = table.union(vec![TypeId::STRING, TypeId::NEVER]);
        assert_eq!(u, TypeId::STRING);
    }

    #[test]
    fn enum_registration_exposes_shape_and_base() {
        let mut table = TypeTable::new();
        let fruit = table.register_number_enum("Fruit", &["Apple", "Banana"]);
        assert_eq!(table.enum_type(fruit.def), Some(fruit.base));
        let shape = table.enum_shape(fruit.def).unwrap();
        assert_eq!(shape.members.len(), 2);
        assert_eq!(&*table.resolve_atom(shape.name), "Fruit");

        // Member handles are nominal: same literal value, different enums,
        // different handles.
        let fruit2 = table.register_number_enum("Fruit2", &["Apple2", "Banana2"]);
        assert_ne!(fruit.members[0], fruit2.members[0]);
    }

    #[test]
    fn distinct_enums_have_distinct_bases() {
        let mut table = TypeTable::new();
        let a = table.register_string_enum("A", &["X"]);
        let b = table.register_string_enum("B", &["X"]);
        assert_ne!(a.base, b.base);
    }
}
