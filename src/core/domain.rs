use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by lending entities
pub trait Identifiable {
    fn id(&self) -> String;
}

pub const DEFAULT_LOAN_DAYS: i64 = 15;
pub const MAX_LOAN_DAYS: i64 = 365;

// due_date adds a loan term to the loan date; terms outside 1..=MAX_LOAN_DAYS are rejected
pub fn due_date(loan_at: NaiveDateTime, loan_days: i64) -> LibraryResult<NaiveDateTime> {
    if !(1..=MAX_LOAN_DAYS).contains(&loan_days) {
        return Err(LibraryError::validation(format!("loan days {} must be between 1 and {}",
                                                    loan_days, MAX_LOAN_DAYS).as_str(), Some("400".to_string())));
    }
    Duration::try_days(loan_days)
        .and_then(|term| loan_at.checked_add_signed(term))
        .ok_or_else(|| LibraryError::validation(format!("due date of {} plus {} days is out of range",
                                                        loan_at, loan_days).as_str(), Some("400".to_string())))
}

// Configuration abstracts lending options for a library branch
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub max_renewals: u32,
    pub loan_days: i64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_renewals: 0,
            loan_days: DEFAULT_LOAN_DAYS,
        }
    }

    pub fn with_max_renewals(mut self, max_renewals: u32) -> Self {
        self.max_renewals = max_renewals;
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime, Utc};
    use crate::core::domain::{due_date, Configuration, MAX_LOAN_DAYS};
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(0, config.max_renewals);
        assert_eq!(15, config.loan_days);
    }

    #[tokio::test]
    async fn test_should_override_max_renewals() {
        let config = Configuration::new("test").with_max_renewals(2);
        assert_eq!(2, config.max_renewals);
    }

    #[tokio::test]
    async fn test_should_compute_due_date() {
        let now = Utc::now().naive_utc();
        assert_eq!(now + Duration::days(15), due_date(now, 15).expect("should compute due date"));
        assert_eq!(now + Duration::days(MAX_LOAN_DAYS), due_date(now, MAX_LOAN_DAYS).expect("should compute due date"));
    }

    #[tokio::test]
    async fn test_should_reject_out_of_range_loan_days() {
        let now = Utc::now().naive_utc();
        for days in [0, -1, MAX_LOAN_DAYS + 1, i64::MAX / 1_000_000, i64::MAX, i64::MIN] {
            assert!(matches!(due_date(now, days), Err(LibraryError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_should_reject_due_date_past_calendar_end() {
        assert!(matches!(due_date(NaiveDateTime::MAX, 1), Err(LibraryError::Validation { .. })));
    }
}
