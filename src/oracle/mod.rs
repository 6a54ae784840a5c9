//! Type oracle layer.
//!
//! The rule engine treats the host type system as an oracle: an
//! identity-preserving table of interned types that can be decomposed
//! and classified but never mutated. This module defines the contract
//! ([`TypeOracle`]), the handle and key model, flag tests, the query
//! functions, and the in-memory reference table ([`TypeTable`]).

mod db;
mod flags;
mod intern;
pub mod queries;
mod types;

pub use db::TypeOracle;
pub use flags::{TypeFlags, type_flags};
pub use intern::{EnumRegistration, TypeTable};
pub use types::*;
