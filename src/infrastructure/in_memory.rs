use crate::domain::contact::Contact;
use crate::domain::item::Item;
use crate::domain::loan::{Loan, LoanId};
use crate::domain::ports::{ContactStore, ItemStore, LoanStore};
use std::collections::HashMap;

/// In-memory contact store keyed by phone.
#[derive(Debug, Default, Clone)]
pub struct InMemoryContactStore {
    contacts: HashMap<String, Contact>,
}

impl InMemoryContactStore {
    /// Creates a new, empty in-memory contact store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for InMemoryContactStore {
    fn store(&mut self, contact: Contact) {
        self.contacts.insert(contact.phone.clone(), contact);
    }

    fn get(&self, phone: &str) -> Option<&Contact> {
        self.contacts.get(phone)
    }

    fn count(&self) -> usize {
        self.contacts.len()
    }
}

/// In-memory item store.
///
/// Items live in a `Vec` in registration order with a side index from id to
/// position, so listings come out in the order items were registered.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemStore {
    items: Vec<Item>,
    index: HashMap<String, usize>,
}

impl InMemoryItemStore {
    /// Creates a new, empty in-memory item store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryItemStore {
    fn store(&mut self, item: Item) {
        match self.index.get(&item.id) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(item.id.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    fn get(&self, id: &str) -> Option<&Item> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        let pos = *self.index.get(id)?;
        self.items.get_mut(pos)
    }

    fn all(&self) -> Vec<&Item> {
        self.items.iter().collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }
}

/// In-memory loan history. A loan's id is its index in the history.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLoanStore {
    loans: Vec<Loan>,
}

impl InMemoryLoanStore {
    /// Creates a new, empty loan history.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoanStore for InMemoryLoanStore {
    fn next_id(&self) -> LoanId {
        LoanId(self.loans.len())
    }

    fn append(&mut self, loan: Loan) {
        self.loans.push(loan);
    }

    fn get(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get(id.0)
    }

    fn get_mut(&mut self, id: LoanId) -> Option<&mut Loan> {
        self.loans.get_mut(id.0)
    }

    fn all(&self) -> Vec<&Loan> {
        self.loans.iter().collect()
    }
}
