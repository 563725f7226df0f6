use super::loan::LoanId;
use serde::{Serialize, Serializer};
use std::fmt;

/// Category recorded for every book.
pub const BOOK_KIND: &str = "book";

/// Variant-specific payload of an [`Item`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ItemDetails {
    Generic,
    Book { author: String },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Availability {
    Available,
    OnLoan,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::OnLoan => f.write_str("on loan"),
        }
    }
}

impl Serialize for Availability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A loanable object.
///
/// Availability is derived from `current_loan`: an item is on loan exactly
/// while it points at an unreturned loan in the registry's history.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Item {
    /// Unique key within the item store. For books this is the ISBN.
    pub id: String,
    pub name: String,
    /// Free-form category such as "tool" or "game".
    pub kind: String,
    pub current_loan: Option<LoanId>,
    pub details: ItemDetails,
}

impl Item {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            current_loan: None,
            details: ItemDetails::Generic,
        }
    }

    pub fn book(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: isbn.into(),
            name: title.into(),
            kind: BOOK_KIND.to_string(),
            current_loan: None,
            details: ItemDetails::Book {
                author: author.into(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.current_loan.is_none()
    }

    pub fn availability(&self) -> Availability {
        if self.is_available() {
            Availability::Available
        } else {
            Availability::OnLoan
        }
    }

    pub fn is_book(&self) -> bool {
        matches!(self.details, ItemDetails::Book { .. })
    }

    pub fn author(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::Book { author } => Some(author),
            ItemDetails::Generic => None,
        }
    }

    /// A book's ISBN is its id; generic items have none.
    pub fn isbn(&self) -> Option<&str> {
        self.is_book().then_some(self.id.as_str())
    }

    /// Marks the item as lent under `loan`.
    pub fn check_out(&mut self, loan: LoanId) {
        self.current_loan = Some(loan);
    }

    /// Clears the current loan, returning the id it pointed at.
    pub fn check_in(&mut self) -> Option<LoanId> {
        self.current_loan.take()
    }
}
