//! # tsel — strict enum usage analysis engine
//!
//! A lint engine that enforces strict usage of TypeScript-style enums:
//! enum values may only be assigned, compared, and passed where a value
//! of the same enum family is expected, and may never be incremented or
//! decremented.
//!
//! The engine performs no parsing and no type checking of its own. An
//! external tree walker feeds it [`syntax::SyntaxEvent`]s whose operand
//! types are handles into a [`oracle::TypeOracle`]; the engine resolves
//! enum membership through the oracle, applies one compatibility
//! predicate per operation category, and emits findings into a
//! [`diagnostics::DiagnosticBag`].
//!
//! ```
//! use tsel::diagnostics::DiagnosticBag;
//! use tsel::oracle::TypeTable;
//! use tsel::rules::StrictEnumsRule;
//! use tsel::span::Span;
//! use tsel::syntax::SyntaxEvent;
//!
//! let mut table = TypeTable::new();
//! let fruit = table.register_number_enum("Fruit", &["Apple", "Banana"]);
//! let event = SyntaxEvent::Update {
//!     span: Span::new(0, 3),
//!     operand: fruit.base,
//! };
//!
//! let mut bag = DiagnosticBag::with_file("input.ts");
//! StrictEnumsRule::default()
//!     .check_event(&table, &event, &mut bag)
//!     .unwrap();
//! assert_eq!(bag.codes(), vec![9101]);
//! ```

// Source locations for diagnostics
pub mod span;

// Diagnostic collection - the reporting sink rules emit into
pub mod diagnostics;

// Type oracle layer - interned type handles and the host contract
pub mod oracle;

// Syntax events - the strongly-typed walker interface
pub mod syntax;

// Lint rules
pub mod rules;

// Env-driven tracing setup for debugging
pub mod tracing_config;

pub use diagnostics::{Diagnostic, DiagnosticBag, DiagnosticSeverity};
pub use rules::{StrictEnumsOptions, StrictEnumsRule};
pub use span::Span;
