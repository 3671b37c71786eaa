use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::model::LoanEntity;
use crate::core::library::LoanStatus;
use crate::utils::date::serializer;

// LoanDto joins a loan with the patron name and book title for display, and
// carries the fine accrued so far ("fine if returned now" for pending loans).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanDto {
    pub patron_id: i64,
    pub patron_name: String,
    pub book_id: i64,
    pub book_title: String,
    #[serde(with = "serializer")]
    pub loan_date: NaiveDateTime,
    pub loan_status: LoanStatus,
    pub returned_at: Option<NaiveDateTime>,
    pub fine_accrued: i64,
}

impl LoanDto {
    pub fn from_loan(loan: &LoanEntity, patron_name: &str, book_title: &str, fine_accrued: i64) -> Self {
        Self {
            patron_id: loan.patron_id,
            patron_name: patron_name.to_string(),
            book_id: loan.book_id,
            book_title: book_title.to_string(),
            loan_date: loan.loan_date,
            loan_status: loan.loan_status,
            returned_at: loan.returned_at,
            fine_accrued,
        }
    }
}

impl Display for LoanDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' to {} on {} - {}",
               self.book_title, self.patron_name,
               self.loan_date.format("%Y-%m-%d"), self.loan_status)
    }
}

// ReturnReceipt is the outcome of a successful return: the closed loan and
// the fine charged for it. A missing loan is signaled as an error instead of
// being folded into a zero fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub loan: LoanDto,
    pub fine: i64,
}
