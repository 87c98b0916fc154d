use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde::de::Error;
use tracing::{info, warn};
use uuid::Uuid;
use crate::books::domain::model::BookCopy;
use crate::core::domain::{due_date, Identifiable, DEFAULT_LOAN_DAYS};
use crate::core::library::{LibraryError, LibraryResult, LoanKind, LoanStatus};
use crate::parties::domain::model::Patron;
use crate::utils::date::{opt_serializer, serializer};

// RenewalOutcome reports what a renewal did. Reaching the limit is expected and not an error.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum RenewalOutcome {
    Renewed { renewal_count: u32 },
    LimitReached { max_renewals: u32 },
    LoanReturned,
}

// Loan abstracts a copy borrowed by a patron, either physically or digitally. Patron, book
// and copy are referenced by id; creating a loan does not change the copy.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Loan {
    loan_id: String,
    kind: LoanKind,
    patron_id: String,
    book_id: String,
    copy_id: String,
    loan_status: LoanStatus,
    #[serde(with = "serializer")]
    loan_at: NaiveDateTime,
    #[serde(with = "serializer")]
    due_at: NaiveDateTime,
    #[serde(with = "opt_serializer")]
    returned_at: Option<NaiveDateTime>,
    renewal_count: u32,
    max_renewals: u32,
    #[serde(deserialize_with = "deserialize_loan_days")]
    loan_days: i64,
}

fn deserialize_loan_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let loan_days: i64 = Deserialize::deserialize(deserializer)?;
    due_date(NaiveDateTime::default(), loan_days).map_err(D::Error::custom)?;
    Ok(loan_days)
}

impl Loan {
    pub fn new(kind: LoanKind, patron: &Patron, copy: &BookCopy) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            loan_id: Uuid::new_v4().to_string(),
            kind,
            patron_id: patron.id(),
            book_id: copy.book_id().to_string(),
            copy_id: copy.id(),
            loan_status: LoanStatus::OnLoan,
            loan_at: now,
            due_at: now + Duration::days(DEFAULT_LOAN_DAYS),
            returned_at: None,
            renewal_count: 0,
            max_renewals: 0,
            loan_days: DEFAULT_LOAN_DAYS,
        }
    }

    pub fn physical(patron: &Patron, copy: &BookCopy) -> Self {
        Self::new(LoanKind::Physical, patron, copy)
    }

    pub fn digital(patron: &Patron, copy: &BookCopy) -> Self {
        Self::new(LoanKind::Digital, patron, copy)
    }

    pub fn with_max_renewals(mut self, max_renewals: u32) -> Self {
        self.max_renewals = max_renewals;
        self
    }

    pub fn with_loan_days(mut self, loan_days: i64) -> LibraryResult<Self> {
        self.due_at = due_date(self.loan_at, loan_days)?;
        self.loan_days = loan_days;
        Ok(self)
    }

    pub fn kind(&self) -> LoanKind {
        self.kind
    }

    pub fn loan_kind(&self) -> &'static str {
        self.kind.label()
    }

    pub fn patron_id(&self) -> &str {
        self.patron_id.as_str()
    }

    pub fn book_id(&self) -> &str {
        self.book_id.as_str()
    }

    pub fn copy_id(&self) -> &str {
        self.copy_id.as_str()
    }

    pub fn status(&self) -> LoanStatus {
        self.loan_status
    }

    pub fn loan_at(&self) -> NaiveDateTime {
        self.loan_at
    }

    pub fn due_at(&self) -> NaiveDateTime {
        self.due_at
    }

    pub fn returned_at(&self) -> Option<NaiveDateTime> {
        self.returned_at
    }

    pub fn renewal_count(&self) -> u32 {
        self.renewal_count
    }

    pub fn max_renewals(&self) -> u32 {
        self.max_renewals
    }

    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.loan_status == LoanStatus::OnLoan && self.due_at < now
    }

    // Closes the loan and makes the copy available again. A loan can only be returned once;
    // the second attempt fails without touching the copy, which may have been lent again.
    pub fn return_loan(&mut self, copy: &mut BookCopy) -> LibraryResult<()> {
        if copy.id() != self.copy_id {
            return Err(LibraryError::validation(format!("copy {} does not belong to loan {}",
                                                        copy.id(), self.loan_id).as_str(), Some("400".to_string())));
        }
        if self.loan_status == LoanStatus::Returned {
            warn!(loan_id = self.loan_id.as_str(), "loan already returned");
            return Err(LibraryError::validation(format!("loan {} is already returned",
                                                        self.loan_id).as_str(), Some("400".to_string())));
        }
        self.returned_at = Some(Utc::now().naive_utc());
        self.loan_status = LoanStatus::Returned;
        copy.return_copy();
        info!(loan_id = self.loan_id.as_str(), copy_id = self.copy_id.as_str(), "loan returned");
        Ok(())
    }

    pub fn renew(&mut self) -> RenewalOutcome {
        if self.loan_status == LoanStatus::Returned {
            warn!(loan_id = self.loan_id.as_str(), "cannot renew a returned loan");
            return RenewalOutcome::LoanReturned;
        }
        if self.renewal_count < self.max_renewals {
            self.renewal_count += 1;
            self.loan_at = Utc::now().naive_utc();
            // loan_days is validated on every way in, so this only saturates at the calendar end
            self.due_at = due_date(self.loan_at, self.loan_days).unwrap_or(NaiveDateTime::MAX);
            info!(loan_id = self.loan_id.as_str(), renewal_count = self.renewal_count, "loan renewed");
            RenewalOutcome::Renewed { renewal_count: self.renewal_count }
        } else {
            info!(loan_id = self.loan_id.as_str(), max_renewals = self.max_renewals,
                "maximum number of renewals reached");
            RenewalOutcome::LimitReached { max_renewals: self.max_renewals }
        }
    }
}

impl Identifiable for Loan {
    fn id(&self) -> String {
        self.loan_id.to_string()
    }
}

impl Display for Loan {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} of copy {} by patron {} ({})",
               self.loan_kind(), self.loan_id, self.copy_id, self.patron_id, self.loan_status)
    }
}
