use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::checkout::domain::model::Loan;
use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::utils::date::serializer;

// LoanEventType names the loan change that was journaled
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanEventType {
    Created,
    Renewed,
    Returned,
}

impl Display for LoanEventType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanEventType::Created => write!(f, "loan_created"),
            LoanEventType::Renewed => write!(f, "loan_renewed"),
            LoanEventType::Returned => write!(f, "loan_returned"),
        }
    }
}

// DomainEvent records a loan change at a branch along with the loan as it was after the change
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub kind: LoanEventType,
    pub branch_id: String,
    pub loan_id: String,
    pub patron_id: String,
    pub book_id: String,
    pub loan: Loan,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn loan_created(branch_id: &str, loan: &Loan) -> Self {
        Self::build(LoanEventType::Created, branch_id, loan)
    }

    pub fn loan_renewed(branch_id: &str, loan: &Loan) -> Self {
        Self::build(LoanEventType::Renewed, branch_id, loan)
    }

    pub fn loan_returned(branch_id: &str, loan: &Loan) -> Self {
        Self::build(LoanEventType::Returned, branch_id, loan)
    }

    pub fn name(&self) -> String {
        self.kind.to_string()
    }

    pub fn to_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn build(kind: LoanEventType, branch_id: &str, loan: &Loan) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            kind,
            branch_id: branch_id.to_string(),
            loan_id: loan.id(),
            patron_id: loan.patron_id().to_string(),
            book_id: loan.book_id().to_string(),
            loan: loan.clone(),
            created_at: Utc::now().naive_utc(),
        }
    }
}
