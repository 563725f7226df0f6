//! Adapters that feed the registry from outside the process.

pub mod csv;
