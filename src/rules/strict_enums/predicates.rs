//! Compatibility predicates.
//!
//! Four independent decision procedures, one per operation category:
//! assignment, comparison, increment/decrement, and function-call
//! argument passing. Each is a pure function of its operand types and
//! the read-only oracle; `true` means "violation".
//!
//! Ordering inside each predicate is load-bearing. In particular, the
//! call-argument check rejects raw literals before consulting the
//! constituent-overlap escape hatch; swapping the two changes which
//! wins on ambiguous inputs.

use crate::oracle::queries::{
    has_intersection_constituent, is_generic_container, matching_container_args,
    union_constituents,
};
use crate::oracle::{TypeFlags, TypeId, TypeOracle, type_flags};
use crate::rules::strict_enums::classifier::{EnumKind, InvariantError, enum_kinds};
use crate::rules::strict_enums::resolver::{EnumTypeSet, enum_types, has_enum_types};
use crate::syntax::BinaryOp;
use rustc_hash::FxHashSet;

/// Types the host checker already validates exhaustively; the rule
/// trusts it and stays silent on them.
const HOST_VALIDATED: TypeFlags = TypeFlags::ANY
    .union(TypeFlags::UNKNOWN)
    .union(TypeFlags::NEVER)
    .union(TypeFlags::NULL)
    .union(TypeFlags::UNDEFINED);

/// Flags a type could never carry while being the enum side of a
/// meaningful comparison.
const IMPOSSIBLE_ENUM: TypeFlags = TypeFlags::BOOLEAN_LIKE
    .union(TypeFlags::NON_PRIMITIVE)
    .union(TypeFlags::SYMBOL_LIKE);

/// Broad parameter constituents that safely accept any enum argument.
const BROAD_PARAMETER: TypeFlags = TypeFlags::ANY
    .union(TypeFlags::UNKNOWN)
    .union(TypeFlags::NUMBER)
    .union(TypeFlags::STRING);

fn disjoint(left: &EnumTypeSet, right: &EnumTypeSet) -> bool {
    left.is_disjoint(right)
}

// =============================================================================
// Assignment
// =============================================================================

/// Check whether assigning `value` into an lvalue of type `target`
/// violates enum safety.
///
/// Container instantiations of the same container recurse pairwise over
/// their type arguments, so `Fruit[] = [0, 1]` is caught through the
/// element types. Otherwise a right-hand side is accepted iff it draws
/// from at least one of the target's enum families.
pub fn is_invalid_assignment(
    db: &dyn TypeOracle,
    target: TypeId,
    value: TypeId,
) -> Result<bool, InvariantError> {
    if let Some((target_args, value_args)) = matching_container_args(db, target, value) {
        for (&t, &v) in target_args.iter().zip(value_args.iter()) {
            if is_invalid_assignment(db, t, v)? {
                return Ok(true);
            }
        }
        return Ok(false);
    }

    let target_enums = enum_types(db, target);
    if target_enums.is_empty() {
        // Not an enum-typed assignment target; out of scope.
        return Ok(false);
    }
    if type_flags(db, value).intersects(HOST_VALIDATED) {
        return Ok(false);
    }
    let value_enums = enum_types(db, value);
    let violation = disjoint(&target_enums, &value_enums);
    tracing::trace!(?target, ?value, violation, "assignment check");
    Ok(violation)
}

// =============================================================================
// Comparison
// =============================================================================

/// True when `kinds` is exactly one enum kind and the other operand is
/// a plain primitive of the opposite kind. The host compiler already
/// rejects genuinely impossible comparisons; exempting these avoids
/// false positives on deliberately loose ones.
fn cross_kind_exempt(
    kinds: &FxHashSet<EnumKind>,
    other_enums: &EnumTypeSet,
    other_flags: TypeFlags,
) -> bool {
    if !other_enums.is_empty() || kinds.len() != 1 {
        return false;
    }
    (kinds.contains(&EnumKind::HasStringValues) && other_flags.is_number_like())
        || (kinds.contains(&EnumKind::HasNumberValues) && other_flags.is_string_like())
}

/// Check whether comparing `left` and `right` with `op` violates enum
/// safety: the two sides must share at least one enum family.
///
/// Bitwise and membership operators are exempt, as are intersections,
/// impossible-enum operand shapes, and host-validated types.
pub fn is_invalid_comparison(
    db: &dyn TypeOracle,
    op: BinaryOp,
    left: TypeId,
    right: TypeId,
) -> Result<bool, InvariantError> {
    if op.is_exempt_from_comparison_check() {
        return Ok(false);
    }

    let left_enums = enum_types(db, left);
    let right_enums = enum_types(db, right);
    if left_enums.is_empty() && right_enums.is_empty() {
        return Ok(false);
    }

    if has_intersection_constituent(db, left) || has_intersection_constituent(db, right) {
        // Intersections with enums are rare and assumed intentional.
        return Ok(false);
    }

    let left_flags = type_flags(db, left);
    let right_flags = type_flags(db, right);
    if (left_flags | right_flags).intersects(IMPOSSIBLE_ENUM) {
        return Ok(false);
    }
    if (left_flags | right_flags).intersects(HOST_VALIDATED) {
        return Ok(false);
    }

    let left_kinds = enum_kinds(db, left)?;
    let right_kinds = enum_kinds(db, right)?;
    if cross_kind_exempt(&left_kinds, &right_enums, right_flags)
        || cross_kind_exempt(&right_kinds, &left_enums, left_flags)
    {
        return Ok(false);
    }

    let violation = disjoint(&left_enums, &right_enums);
    tracing::trace!(?op, ?left, ?right, violation, "comparison check");
    Ok(violation)
}

/// Check whether the comparison should additionally be flagged for its
/// operator: enum values compared with a loose or relational operator.
///
/// Only consulted when the operator policy option is enabled, and only
/// for comparisons that are not already mismatched.
pub fn uses_loose_enum_comparison(db: &dyn TypeOracle, op: BinaryOp, left: TypeId, right: TypeId) -> bool {
    op.is_loose_or_relational() && (has_enum_types(db, left) || has_enum_types(db, right))
}

// =============================================================================
// Increment / decrement
// =============================================================================

/// Check whether incrementing or decrementing `operand` violates enum
/// safety. Enums may never be incremented or decremented, regardless of
/// value kind — the operation has no valid enum semantics at all.
pub fn is_invalid_increment(db: &dyn TypeOracle, operand: TypeId) -> Result<bool, InvariantError> {
    Ok(has_enum_types(db, operand))
}

// =============================================================================
// Call arguments
// =============================================================================

/// Check whether passing `argument` into a parameter of type
/// `parameter` violates enum safety.
pub fn is_invalid_function_argument(
    db: &dyn TypeOracle,
    argument: TypeId,
    parameter: TypeId,
) -> Result<bool, InvariantError> {
    // Container arguments recurse pairwise against every matching
    // container constituent of the parameter, and never fall through to
    // the scalar logic below.
    if is_generic_container(db, argument) {
        for part in union_constituents(db, parameter) {
            if let Some((arg_args, param_args)) = matching_container_args(db, argument, part) {
                for (&a, &p) in arg_args.iter().zip(param_args.iter()) {
                    if is_invalid_function_argument(db, a, p)? {
                        return Ok(true);
                    }
                }
            }
        }
        return Ok(false);
    }

    let parameter_enums = enum_types(db, parameter);
    if parameter_enums.is_empty() {
        // Parameter isn't enum-typed; out of scope.
        return Ok(false);
    }

    let parameter_parts = union_constituents(db, parameter);
    for &part in &parameter_parts {
        if type_flags(db, part).intersects(BROAD_PARAMETER) {
            // A parameter accepting a broad primitive accepts any enum
            // argument safely.
            return Ok(false);
        }
    }

    // A raw literal can never satisfy an enum-typed parameter. This
    // rejection runs before the overlap escape hatch below.
    let argument_parts = union_constituents(db, argument);
    for &part in &argument_parts {
        let flags = type_flags(db, part);
        if flags.intersects(TypeFlags::NUMBER_LITERAL | TypeFlags::STRING_LITERAL)
            && !flags.contains(TypeFlags::ENUM_LITERAL)
        {
            return Ok(true);
        }
    }

    // Direct structural overlap of the raw constituent handles — e.g.
    // passing part of a union the parameter already accepts.
    let parameter_handles: FxHashSet<TypeId> = parameter_parts.iter().copied().collect();
    if argument_parts.iter().any(|part| parameter_handles.contains(part)) {
        return Ok(false);
    }

    let argument_enums = enum_types(db, argument);
    let violation = disjoint(&argument_enums, &parameter_enums);
    tracing::trace!(?argument, ?parameter, violation, "call-argument check");
    Ok(violation)
}
