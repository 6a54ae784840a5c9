//! Strict enum usage rule.
//!
//! Enforces that enum values are only assigned, compared, and passed
//! where a value of the same enum family is expected, and are never
//! incremented or decremented. The rule is diagnostic-only: it offers
//! no autofix.
//!
//! The engine is stateless and re-entrant: every syntax event is
//! checked locally, with no ordering dependency between sibling nodes.

pub mod classifier;
pub mod predicates;
pub mod resolver;


use crate::diagnostics::DiagnosticBag;
use crate::oracle::{FunctionShape, TypeId, TypeKey, TypeOracle};
use crate::oracle::queries::resolve_constraint;
use crate::span::Span;
use crate::syntax::SyntaxEvent;

pub use classifier::{EnumKind, InvariantError};
pub use resolver::EnumTypeSet;

/// The rule name attached to every diagnostic.
pub const RULE_NAME: &str = "strict-enums";

// =============================================================================
// Messages
// =============================================================================

/// A structured finding produced by the rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleMessage {
    IncorrectIncrement,
    MismatchedAssignment,
    MismatchedComparison,
    /// Carries the 1-based argument position as an English ordinal
    /// ("1st", "2nd", ...).
    MismatchedFunctionArgument { ordinal: String },
    IncorrectComparisonOperator,
}

impl RuleMessage {
    /// The stable diagnostic code for this message kind.
    pub fn code(&self) -> u32 {
        match self {
            RuleMessage::IncorrectIncrement => 9101,
            RuleMessage::MismatchedAssignment => 9102,
            RuleMessage::MismatchedComparison => 9103,
            RuleMessage::MismatchedFunctionArgument { .. } => 9104,
            RuleMessage::IncorrectComparisonOperator => 9105,
        }
    }

    /// Render the user-facing message text.
    pub fn message(&self) -> String {
        match self {
            RuleMessage::IncorrectIncrement => {
                "You cannot increment or decrement an enum type.".to_string()
            }
            RuleMessage::MismatchedAssignment => {
                "The type of the assignment does not match the declared enum type of the variable."
                    .to_string()
            }
            RuleMessage::MismatchedComparison => {
                "The two things in the comparison do not have a shared enum type.".to_string()
            }
            RuleMessage::MismatchedFunctionArgument { ordinal } => format!(
                "The {ordinal} argument in the function call does not match the declared enum type of the function signature."
            ),
            RuleMessage::IncorrectComparisonOperator => {
                "You can only compare enum values with the `===` and `!==` operators.".to_string()
            }
        }
    }
}

/// Format a 1-based position as an English ordinal ("1st", "2nd",
/// "3rd", "4th", ..., "11th", "21st").
pub fn ordinal(n: usize) -> String {
    let suffix = match n % 100 {
        11 | 12 | 13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

// =============================================================================
// Options
// =============================================================================

/// Rule configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictEnumsOptions {
    /// Additionally flag enum comparisons written with loose equality
    /// or relational operators (`==`, `!=`, `<`, `>`, `<=`, `>=`).
    /// Off by default; whether enums should ever be compared with
    /// these operators is an evolving policy point.
    pub flag_loose_operators: bool,
}

// =============================================================================
// Rule
// =============================================================================

/// The strict enum usage rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrictEnumsRule {
    options: StrictEnumsOptions,
}

impl StrictEnumsRule {
    pub fn new(options: StrictEnumsOptions) -> Self {
        StrictEnumsRule { options }
    }

    fn report(&self, bag: &mut DiagnosticBag, span: Span, message: RuleMessage) {
        tracing::debug!(?message, ?span, "strict-enums violation");
        let code = message.code();
        let diag = crate::diagnostics::Diagnostic::error(
            bag.default_file().to_string(),
            span,
            message.message(),
            code,
        )
        .with_rule(RULE_NAME);
        bag.add(diag);
    }

    /// Check a single syntax event, emitting diagnostics for every
    /// violation found.
    ///
    /// Contract violations from the classifier abort the analysis run;
    /// they signal host-type-system output this engine cannot model.
    pub fn check_event(
        &self,
        db: &dyn TypeOracle,
        event: &SyntaxEvent,
        bag: &mut DiagnosticBag,
    ) -> Result<(), InvariantError> {
        match event {
            SyntaxEvent::Assignment {
                span,
                op,
                target,
                value,
            } => {
                if let Some(token) = op.comparison_token() {
                    // Compound bitwise assignment: comparison semantics,
                    // always exempt.
                    if predicates::is_invalid_comparison(db, token, *target, *value)? {
                        self.report(bag, *span, RuleMessage::MismatchedComparison);
                    }
                } else if predicates::is_invalid_assignment(db, *target, *value)? {
                    self.report(bag, *span, RuleMessage::MismatchedAssignment);
                }
            }
            SyntaxEvent::Binary {
                span,
                op,
                left,
                right,
            } => {
                if predicates::is_invalid_comparison(db, *op, *left, *right)? {
                    self.report(bag, *span, RuleMessage::MismatchedComparison);
                } else if self.options.flag_loose_operators
                    && predicates::uses_loose_enum_comparison(db, *op, *left, *right)
                {
                    self.report(bag, *span, RuleMessage::IncorrectComparisonOperator);
                }
            }
            SyntaxEvent::Update { span, operand } => {
                if predicates::is_invalid_increment(db, *operand)? {
                    self.report(bag, *span, RuleMessage::IncorrectIncrement);
                }
            }
            SyntaxEvent::CallLike { span: _, callee, args } => {
                let Some(TypeKey::Function(shape_id)) = db.lookup(*callee) else {
                    // No resolvable signature; nothing to check.
                    return Ok(());
                };
                let shape = db.function_shape(shape_id);
                for (index, arg) in args.iter().enumerate() {
                    let Some(declared) = parameter_type_at(db, &shape, index) else {
                        continue;
                    };
                    // A constrained generic parameter checks against its
                    // constraint, mirroring the argument-side rule.
                    let parameter = resolve_constraint(db, declared);
                    if predicates::is_invalid_function_argument(db, arg.ty, parameter)? {
                        self.report(
                            bag,
                            arg.span,
                            RuleMessage::MismatchedFunctionArgument {
                                ordinal: ordinal(index + 1),
                            },
                        );
                    }
                }
            }
            SyntaxEvent::VariableDeclarator {
                span,
                declared,
                init,
            } => {
                let Some(init) = init else {
                    // Bare `let x: Enum;` defers assignment; always valid.
                    return Ok(());
                };
                if predicates::is_invalid_assignment(db, *declared, init.ty)? {
                    self.report(bag, *span, RuleMessage::MismatchedAssignment);
                }
            }
        }
        Ok(())
    }

    /// Check a sequence of events against one bag.
    pub fn check_all(
        &self,
        db: &dyn TypeOracle,
        events: &[SyntaxEvent],
        bag: &mut DiagnosticBag,
    ) -> Result<(), InvariantError> {
        for event in events {
            self.check_event(db, event, bag)?;
        }
        Ok(())
    }
}

/// The declared parameter type facing argument position `index`.
///
/// A trailing rest parameter covers all remaining positions with its
/// element type; positions past the signature are skipped.
fn parameter_type_at(db: &dyn TypeOracle, shape: &FunctionShape, index: usize) -> Option<TypeId> {
    if let Some(param) = shape.params.get(index) {
        if !param.rest {
            return Some(param.ty);
        }
    }
    match shape.params.last() {
        Some(last) if last.rest && index + 1 >= shape.params.len() => {
            match db.lookup(last.ty) {
                Some(TypeKey::Array(element)) => Some(element),
                _ => Some(last.ty),
            }
        }
        _ => None,
    }
}
