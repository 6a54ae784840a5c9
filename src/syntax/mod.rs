//! Syntax events.
//!
//! The external tree walker drives the analysis by handing the engine
//! one strongly-typed event per syntax construct of interest, with the
//! operand types already resolved against the oracle. This replaces the
//! string-keyed visitor tables of typical lint frameworks with a tagged
//! union matched exhaustively by the rule.

use crate::oracle::TypeId;
use crate::span::Span;

// =============================================================================
// Operators
// =============================================================================

/// Assignment operators, as written at an assignment expression or a
/// declarator initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentOp {
    /// `=`
    Assign,
    /// `+=`
    Add,
    /// `-=`
    Sub,
    /// `*=`
    Mul,
    /// `/=`
    Div,
    /// `%=`
    Rem,
    /// `**=`
    Exp,
    /// `<<=`
    Shl,
    /// `>>=`
    Shr,
    /// `>>>=`
    UShr,
    /// `&=`
    BitAnd,
    /// `|=`
    BitOr,
    /// `^=`
    BitXor,
}

impl AssignmentOp {
    /// Compound bitwise assignments route through the comparison check
    /// (where they are exempt); everything else is an assignment check.
    pub fn comparison_token(self) -> Option<BinaryOp> {
        match self {
            AssignmentOp::BitAnd => Some(BinaryOp::BitAndAssign),
            AssignmentOp::BitOr => Some(BinaryOp::BitOrAssign),
            AssignmentOp::BitXor => Some(BinaryOp::BitXorAssign),
            _ => None,
        }
    }
}

/// Binary operators the comparison check can see.
///
/// The compound bitwise assignment tokens appear here because the rule
/// funnels them through the comparison predicate, which exempts them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// `===`
    StrictEquals,
    /// `!==`
    StrictNotEquals,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEquals,
    /// `in`
    In,
    /// `instanceof`
    InstanceOf,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `&=`
    BitAndAssign,
    /// `|=`
    BitOrAssign,
    /// `^=`
    BitXorAssign,
}

impl BinaryOp {
    /// Operators with bitflag or membership semantics legitimately mix
    /// enum and non-enum operands.
    pub fn is_exempt_from_comparison_check(self) -> bool {
        matches!(
            self,
            BinaryOp::In
                | BinaryOp::BitAnd
                | BinaryOp::BitOr
                | BinaryOp::BitXor
                | BinaryOp::BitAndAssign
                | BinaryOp::BitOrAssign
                | BinaryOp::BitXorAssign
        )
    }

    /// Loose equality and relational operators; subject to the optional
    /// operator-strictness policy.
    pub fn is_loose_or_relational(self) -> bool {
        matches!(
            self,
            BinaryOp::Equals
                | BinaryOp::NotEquals
                | BinaryOp::LessThan
                | BinaryOp::LessThanEquals
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterThanEquals
        )
    }
}

// =============================================================================
// Events
// =============================================================================

/// An argument (or initializer) with its resolved type and location.
#[derive(Clone, Copy, Debug)]
pub struct Argument {
    pub span: Span,
    pub ty: TypeId,
}

/// One syntax construct visit, with operand types pre-resolved by the
/// walker. Events are independent; the rule keeps no state between them.
#[derive(Clone, Debug)]
pub enum SyntaxEvent {
    /// `target op value`
    Assignment {
        span: Span,
        op: AssignmentOp,
        target: TypeId,
        value: TypeId,
    },
    /// `left op right`
    Binary {
        span: Span,
        op: BinaryOp,
        left: TypeId,
        right: TypeId,
    },
    /// `operand++` / `--operand` (either direction, either fixity).
    Update { span: Span, operand: TypeId },
    /// A call or `new` expression. `callee` is the resolved function
    /// type whose signature supplies the parameter types.
    CallLike {
        span: Span,
        callee: TypeId,
        args: Vec<Argument>,
    },
    /// `let x: T = init` — declarators without an initializer are never
    /// checked (deferred assignment is the documented escape hatch).
    VariableDeclarator {
        span: Span,
        declared: TypeId,
        init: Option<Argument>,
    },
}

impl SyntaxEvent {
    /// The span diagnostics for this event anchor to by default.
    pub fn span(&self) -> Span {
        match self {
            SyntaxEvent::Assignment { span, .. }
            | SyntaxEvent::Binary { span, .. }
            | SyntaxEvent::Update { span, .. }
            | SyntaxEvent::CallLike { span, .. }
            | SyntaxEvent::VariableDeclarator { span, .. } => *span,
        }
    }
}
