//! Store implementations backing the registry's ports.

pub mod in_memory;
