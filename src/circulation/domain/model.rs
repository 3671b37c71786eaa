use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::library::LoanStatus;
use crate::utils::date::serializer;

// LoanEntity links a patron to a book by stable integer ids. It is immutable
// except for the status and return date, set exactly once on return.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanEntity {
    pub patron_id: i64,
    pub book_id: i64,
    #[serde(with = "serializer")]
    pub loan_date: NaiveDateTime,
    pub loan_status: LoanStatus,
    pub returned_at: Option<NaiveDateTime>,
}

impl LoanEntity {
    pub fn new(patron_id: i64, book_id: i64, loan_date: NaiveDateTime) -> Self {
        Self {
            patron_id,
            book_id,
            loan_date,
            loan_status: LoanStatus::Pending,
            returned_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.loan_status == LoanStatus::Pending
    }

    pub fn mark_returned(&mut self, at: NaiveDateTime) {
        self.loan_status = LoanStatus::Returned;
        self.returned_at = Some(at);
    }

    // Fine owed as of `now`. A returned loan is judged by its return date, a
    // pending one by `now` ("fine if returned now"). Partial days below 24h
    // do not count.
    pub fn fine_as_of(&self, now: NaiveDateTime, config: &Configuration) -> i64 {
        let reference = match self.returned_at {
            Some(at) if self.loan_status == LoanStatus::Returned => at,
            _ => now,
        };
        let elapsed_days = (reference - self.loan_date).num_days();
        if elapsed_days > config.grace_period_days {
            (elapsed_days - config.grace_period_days) * config.daily_fine
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use crate::circulation::domain::model::LoanEntity;
    use crate::core::domain::Configuration;
    use crate::core::library::LoanStatus;

    fn loan_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0)).expect("valid date")
    }

    #[tokio::test]
    async fn test_should_build_loans() {
        let loan = LoanEntity::new(2, 30, loan_date());
        assert_eq!(2, loan.patron_id);
        assert_eq!(30, loan.book_id);
        assert_eq!(LoanStatus::Pending, loan.loan_status);
        assert_eq!(None, loan.returned_at);
        assert!(loan.is_pending());
    }

    #[tokio::test]
    async fn test_should_mark_loans_returned() {
        let mut loan = LoanEntity::new(2, 30, loan_date());
        let at = loan_date() + Duration::days(1);
        loan.mark_returned(at);
        assert_eq!(LoanStatus::Returned, loan.loan_status);
        assert_eq!(Some(at), loan.returned_at);
        assert!(!loan.is_pending());
    }

    #[tokio::test]
    async fn test_should_compute_fine_from_return_date() {
        let config = Configuration::new("test");
        let mut loan = LoanEntity::new(2, 30, loan_date());

        loan.mark_returned(loan_date() + Duration::days(10));
        assert_eq!(1500, loan.fine_as_of(loan_date() + Duration::days(10), &config));

        // fine is frozen at the return date even if queried much later
        assert_eq!(1500, loan.fine_as_of(loan_date() + Duration::days(100), &config));
    }

    #[tokio::test]
    async fn test_should_not_fine_within_grace_period() {
        let config = Configuration::new("test");
        let mut loan = LoanEntity::new(2, 30, loan_date());
        loan.mark_returned(loan_date() + Duration::days(7));
        assert_eq!(0, loan.fine_as_of(loan_date() + Duration::days(7), &config));
    }

    #[tokio::test]
    async fn test_should_fine_one_day_past_grace_period() {
        let config = Configuration::new("test");
        let mut loan = LoanEntity::new(2, 30, loan_date());
        loan.mark_returned(loan_date() + Duration::days(8));
        assert_eq!(500, loan.fine_as_of(loan_date() + Duration::days(8), &config));
    }

    #[tokio::test]
    async fn test_should_ignore_partial_days() {
        let config = Configuration::new("test");
        let mut loan = LoanEntity::new(2, 30, loan_date());
        // 7 days and 23 hours truncates to 7 whole days
        loan.mark_returned(loan_date() + Duration::days(7) + Duration::hours(23));
        assert_eq!(0, loan.fine_as_of(loan_date() + Duration::days(7) + Duration::hours(23), &config));
    }

    #[tokio::test]
    async fn test_should_compute_speculative_fine_while_pending() {
        let config = Configuration::new("test");
        let loan = LoanEntity::new(2, 30, loan_date());
        assert_eq!(0, loan.fine_as_of(loan_date() + Duration::days(3), &config));
        assert_eq!(1000, loan.fine_as_of(loan_date() + Duration::days(9), &config));
    }
}
