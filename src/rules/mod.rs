//! Lint rules.
//!
//! Each rule is a self-contained engine: it receives syntax events from
//! the external walker, consults the type oracle, and emits diagnostics
//! into the reporting sink. Rules share no state with each other.

pub mod strict_enums;

pub use strict_enums::{StrictEnumsOptions, StrictEnumsRule};
