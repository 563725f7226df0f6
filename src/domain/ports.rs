use super::contact::Contact;
use super::item::Item;
use super::loan::{Loan, LoanId};

pub trait ContactStore {
    /// Inserts or replaces the contact keyed by its phone.
    fn store(&mut self, contact: Contact);
    fn get(&self, phone: &str) -> Option<&Contact>;
    /// Number of stored entries.
    fn count(&self) -> usize;

    fn contains(&self, phone: &str) -> bool {
        self.get(phone).is_some()
    }
}

pub trait ItemStore {
    /// Inserts or replaces the item keyed by its id. Replacing keeps the
    /// item's original registration position.
    fn store(&mut self, item: Item);
    fn get(&self, id: &str) -> Option<&Item>;
    fn get_mut(&mut self, id: &str) -> Option<&mut Item>;
    /// All items in registration order.
    fn all(&self) -> Vec<&Item>;
    /// Number of stored entries.
    fn count(&self) -> usize;

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// Append-only loan history.
pub trait LoanStore {
    /// Id the next appended loan will receive.
    fn next_id(&self) -> LoanId;
    fn append(&mut self, loan: Loan);
    fn get(&self, id: LoanId) -> Option<&Loan>;
    fn get_mut(&mut self, id: LoanId) -> Option<&mut Loan>;
    /// All loans in chronological order.
    fn all(&self) -> Vec<&Loan>;
}

pub type ContactStoreBox = Box<dyn ContactStore>;
pub type ItemStoreBox = Box<dyn ItemStore>;
pub type LoanStoreBox = Box<dyn LoanStore>;
