//! Domain model: contacts, loanable items, loans and the store ports the
//! registry persists them through.

pub mod contact;
pub mod item;
pub mod loan;
pub mod ports;
