use chrono::{Duration, Local, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of days a borrower keeps an item before it is due.
pub const LOAN_PERIOD_DAYS: i64 = 14;

/// Day/month/year rendering used for loan dates in listings.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Position of a loan in the registry's append-only history.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct LoanId(pub usize);

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pairs one item with one borrower over a time interval.
///
/// Dates are local wall-clock times, so the due date is always the same
/// time of day exactly 14 calendar days after the loan date, whatever
/// daylight-saving shifts fall in between.
///
/// Loans are never deleted. A loan is active until `return_date` is set,
/// which happens at most once.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Loan {
    pub id: LoanId,
    pub item_id: String,
    pub contact_phone: String,
    pub loan_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
}

impl Loan {
    pub fn new(
        id: LoanId,
        item_id: impl Into<String>,
        contact_phone: impl Into<String>,
        loan_date: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            item_id: item_id.into(),
            contact_phone: contact_phone.into(),
            loan_date,
            due_date: loan_date + Duration::days(LOAN_PERIOD_DAYS),
            return_date: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.return_date.is_none()
    }

    /// Records the return. The first recorded date is kept.
    pub fn close(&mut self, returned_at: NaiveDateTime) {
        if self.return_date.is_none() {
            self.return_date = Some(returned_at);
        }
    }
}

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn serialize_date<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, 0))
            .unwrap()
    }

    #[test]
    fn test_due_date_is_fourteen_days_later() {
        let lent = at(2024, 3, 1, 12, 0);
        let loan = Loan::new(LoanId(0), "123", "111", lent);
        assert_eq!(loan.due_date - loan.loan_date, Duration::days(14));
        assert_eq!(format_date(&loan.due_date), "15/03/2024");
    }

    #[test]
    fn test_due_date_crosses_year_boundary() {
        let loan = Loan::new(LoanId(0), "123", "111", at(2023, 12, 25, 12, 0));
        assert_eq!(format_date(&loan.loan_date), "25/12/2023");
        assert_eq!(format_date(&loan.due_date), "08/01/2024");
    }

    #[test]
    fn test_due_date_late_evening_across_dst_change() {
        // US clocks spring forward on 10/03/2024, EU clocks on 31/03/2024.
        let loan = Loan::new(LoanId(0), "123", "111", at(2024, 3, 1, 23, 30));
        assert_eq!(format_date(&loan.loan_date), "01/03/2024");
        assert_eq!(format_date(&loan.due_date), "15/03/2024");
        assert_eq!(loan.due_date, at(2024, 3, 15, 23, 30));

        let loan = Loan::new(LoanId(1), "123", "111", at(2024, 3, 25, 0, 15));
        assert_eq!(format_date(&loan.due_date), "08/04/2024");
        assert_eq!(loan.due_date, at(2024, 4, 8, 0, 15));

        // Fall back: US 03/11/2024, EU 27/10/2024.
        let loan = Loan::new(LoanId(2), "123", "111", at(2024, 10, 25, 0, 30));
        assert_eq!(format_date(&loan.due_date), "08/11/2024");
        assert_eq!(loan.due_date, at(2024, 11, 8, 0, 30));
    }

    #[test]
    fn test_close_keeps_first_return_date() {
        let mut loan = Loan::new(LoanId(2), "001", "222", at(2024, 5, 1, 12, 0));
        assert!(loan.is_active());

        loan.close(at(2024, 5, 3, 12, 0));
        loan.close(at(2024, 5, 9, 12, 0));
        assert!(!loan.is_active());
        assert_eq!(loan.return_date, Some(at(2024, 5, 3, 12, 0)));
    }
}
