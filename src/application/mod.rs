//! Application layer containing the lending rules.
//!
//! This module defines the `LoanRegistry`, the single entry point that owns
//! contacts, items and loan history and keeps item availability consistent
//! with that history. Commands parsed by the interfaces layer are dispatched
//! through `LoanRegistry::apply`.

pub mod command;
pub mod registry;
