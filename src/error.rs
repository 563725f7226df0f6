use crate::domain::loan::LoanId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("contact with phone {phone} already exists")]
    ContactAlreadyExists { phone: String },
    #[error("book with ISBN {isbn} already exists")]
    BookAlreadyExists { isbn: String },
    #[error("item with id {id} already exists")]
    ItemAlreadyExists { id: String },
    #[error("item with id {id} not found")]
    ItemNotFound { id: String },
    #[error("contact with phone {phone} not found")]
    ContactNotFound { phone: String },
    #[error("item '{name}' is already on loan")]
    AlreadyOnLoan { name: String },
    #[error("item '{name}' is not on loan")]
    NotOnLoan { name: String },
    #[error("item {item_id} points at loan {loan} which is missing from history")]
    DanglingLoan { item_id: String, loan: LoanId },
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl LoanError {
    /// True for business-rule rejections (duplicate or missing keys, wrong
    /// availability state).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::ContactAlreadyExists { .. }
                | Self::BookAlreadyExists { .. }
                | Self::ItemAlreadyExists { .. }
                | Self::ItemNotFound { .. }
                | Self::ContactNotFound { .. }
                | Self::AlreadyOnLoan { .. }
                | Self::NotOnLoan { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
