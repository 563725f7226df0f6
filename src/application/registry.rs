use crate::application::command::Command;
use crate::domain::contact::Contact;
use crate::domain::item::{Availability, Item};
use crate::domain::loan::{self, Loan, LoanId};
use crate::domain::ports::{ContactStoreBox, ItemStoreBox, LoanStoreBox};
use crate::error::{LoanError, Result};
use crate::infrastructure::in_memory::{InMemoryContactStore, InMemoryItemStore, InMemoryLoanStore};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info};

/// Success value of a registry operation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Receipt {
    ContactRegistered { name: String },
    BookRegistered { title: String },
    ItemRegistered { name: String },
    Lent { item: String, borrower: String },
    Returned { item: String },
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receipt::ContactRegistered { name } => write!(f, "contact {name} registered"),
            Receipt::BookRegistered { title } => write!(f, "book '{title}' registered"),
            Receipt::ItemRegistered { name } => write!(f, "item '{name}' registered"),
            Receipt::Lent { item, borrower } => write!(f, "item '{item}' lent to {borrower}"),
            Receipt::Returned { item } => write!(f, "item '{item}' returned"),
        }
    }
}

/// One row of [`LoanRegistry::list_items`].
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ItemSummary {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub status: Availability,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            kind: item.kind.clone(),
            status: item.availability(),
        }
    }
}

impl fmt::Display for ItemSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} - '{}' - kind: {} - {}",
            self.id, self.name, self.kind, self.status
        )
    }
}

/// One row of [`LoanRegistry::list_active_loans`].
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct ActiveLoanSummary {
    pub item_name: String,
    pub borrower_name: String,
    pub borrower_phone: String,
    #[serde(serialize_with = "loan::serialize_date")]
    pub loan_date: NaiveDateTime,
    #[serde(serialize_with = "loan::serialize_date")]
    pub due_date: NaiveDateTime,
}

impl fmt::Display for ActiveLoanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item: '{}' - borrowed by {} (phone: {}) - lent: {} - due: {}",
            self.item_name,
            self.borrower_name,
            self.borrower_phone,
            loan::format_date(&self.loan_date),
            loan::format_date(&self.due_date)
        )
    }
}

/// Owns contacts, items and loan history and exposes every lending
/// operation.
///
/// Each operation validates all referenced keys and the item's availability
/// before touching any store, so a rejected call leaves the registry as it
/// was.
pub struct LoanRegistry {
    contacts: ContactStoreBox,
    items: ItemStoreBox,
    loans: LoanStoreBox,
}

impl Default for LoanRegistry {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl LoanRegistry {
    /// Creates a registry over the given stores.
    ///
    /// # Arguments
    ///
    /// * `contacts` - Contacts keyed by phone.
    /// * `items` - Items keyed by id, in registration order.
    /// * `loans` - Append-only loan history.
    pub fn new(contacts: ContactStoreBox, items: ItemStoreBox, loans: LoanStoreBox) -> Self {
        Self {
            contacts,
            items,
            loans,
        }
    }

    /// Creates an empty registry backed by in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Box::new(InMemoryContactStore::new()),
            Box::new(InMemoryItemStore::new()),
            Box::new(InMemoryLoanStore::new()),
        )
    }

    pub fn register_contact(&mut self, name: &str, phone: &str) -> Result<Receipt> {
        if self.contacts.contains(phone) {
            return reject(LoanError::ContactAlreadyExists {
                phone: phone.to_string(),
            });
        }

        self.contacts.store(Contact::new(name, phone));
        debug!(phone, "contact registered");
        Ok(Receipt::ContactRegistered {
            name: name.to_string(),
        })
    }

    pub fn register_book(&mut self, title: &str, author: &str, isbn: &str) -> Result<Receipt> {
        if self.items.contains(isbn) {
            return reject(LoanError::BookAlreadyExists {
                isbn: isbn.to_string(),
            });
        }

        self.items.store(Item::book(title, author, isbn));
        debug!(isbn, "book registered");
        Ok(Receipt::BookRegistered {
            title: title.to_string(),
        })
    }

    pub fn register_item(&mut self, name: &str, kind: &str, id: &str) -> Result<Receipt> {
        if self.items.contains(id) {
            return reject(LoanError::ItemAlreadyExists { id: id.to_string() });
        }

        self.items.store(Item::new(name, kind, id));
        debug!(id, kind, "item registered");
        Ok(Receipt::ItemRegistered {
            name: name.to_string(),
        })
    }

    /// Lends item `id` to the contact with `phone`.
    ///
    /// Missing item and missing contact are reported before an item that is
    /// already on loan.
    pub fn lend_item(&mut self, id: &str, phone: &str) -> Result<Receipt> {
        let Some(item) = self.items.get_mut(id) else {
            return reject(LoanError::ItemNotFound { id: id.to_string() });
        };
        let Some(contact) = self.contacts.get(phone) else {
            return reject(LoanError::ContactNotFound {
                phone: phone.to_string(),
            });
        };
        if !item.is_available() {
            return reject(LoanError::AlreadyOnLoan {
                name: item.name.clone(),
            });
        }

        let loan_id = self.loans.next_id();
        self.loans.append(Loan::new(loan_id, id, phone, loan::now()));
        item.check_out(loan_id);

        info!(item = id, phone, loan = %loan_id, "item lent");
        Ok(Receipt::Lent {
            item: item.name.clone(),
            borrower: contact.name.clone(),
        })
    }

    /// Closes the current loan of item `id`. The loan stays in history with
    /// its return date set.
    pub fn return_item(&mut self, id: &str) -> Result<Receipt> {
        let Some(item) = self.items.get_mut(id) else {
            return reject(LoanError::ItemNotFound { id: id.to_string() });
        };
        let Some(loan_id) = item.current_loan else {
            return reject(LoanError::NotOnLoan {
                name: item.name.clone(),
            });
        };
        let Some(loan) = self.loans.get_mut(loan_id) else {
            error!(item = id, loan = %loan_id, "current loan missing from history");
            return Err(LoanError::DanglingLoan {
                item_id: id.to_string(),
                loan: loan_id,
            });
        };

        loan.close(loan::now());
        item.check_in();

        info!(item = id, loan = %loan_id, "item returned");
        Ok(Receipt::Returned {
            item: item.name.clone(),
        })
    }

    /// Every item in registration order with its availability.
    pub fn list_items(&self) -> Vec<ItemSummary> {
        self.items.all().into_iter().map(ItemSummary::from).collect()
    }

    /// Unreturned loans in the order they were made.
    pub fn list_active_loans(&self) -> Vec<ActiveLoanSummary> {
        self.loans
            .all()
            .into_iter()
            .filter(|loan| loan.is_active())
            .filter_map(|loan| {
                let item = self.items.get(&loan.item_id)?;
                let contact = self.contacts.get(&loan.contact_phone)?;
                Some(ActiveLoanSummary {
                    item_name: item.name.clone(),
                    borrower_name: contact.name.clone(),
                    borrower_phone: contact.phone.clone(),
                    loan_date: loan.loan_date,
                    due_date: loan.due_date,
                })
            })
            .collect()
    }

    /// Dispatches a parsed command to the matching operation.
    pub fn apply(&mut self, command: Command) -> Result<Receipt> {
        debug!(command = command.verb(), "applying command");
        match command {
            Command::RegisterContact { name, phone } => self.register_contact(&name, &phone),
            Command::RegisterBook {
                title,
                author,
                isbn,
            } => self.register_book(&title, &author, &isbn),
            Command::RegisterItem { name, kind, id } => self.register_item(&name, &kind, &id),
            Command::Lend { id, phone } => self.lend_item(&id, &phone),
            Command::Return { id } => self.return_item(&id),
        }
    }

    pub fn contact(&self, phone: &str) -> Option<&Contact> {
        self.contacts.get(phone)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get(id)
    }

    /// Full loan history, returned loans included.
    pub fn loan_history(&self) -> Vec<&Loan> {
        self.loans.all()
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.count()
    }

    pub fn item_count(&self) -> usize {
        self.items.count()
    }
}

fn reject<T>(err: LoanError) -> Result<T> {
    debug!(reason = %err, "operation rejected");
    Err(err)
}
