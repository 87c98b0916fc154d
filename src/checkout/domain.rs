use chrono::NaiveDateTime;
use tracing::{info, warn};
use crate::books::domain::model::{Book, BookCopy};
use crate::checkout::domain::model::{Loan, RenewalOutcome};
use crate::core::domain::Identifiable;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, LoanKind};
use crate::parties::domain::model::Patron;

pub mod model;
pub mod service;

pub trait LendingService {
    fn add_book(&mut self, book: Book) -> LibraryResult<String>;
    fn find_book_by_id(&self, id: &str) -> LibraryResult<&Book>;
    fn add_patron(&mut self, patron: Patron) -> LibraryResult<String>;
    fn update_patron(&mut self, patron: Patron) -> LibraryResult<()>;
    fn find_patron_by_id(&self, id: &str) -> LibraryResult<&Patron>;
    fn checkout(&mut self, patron_id: &str, book_id: &str, kind: LoanKind) -> LibraryResult<Loan>;
    fn returned(&mut self, loan_id: &str) -> LibraryResult<Loan>;
    fn renew(&mut self, loan_id: &str) -> LibraryResult<RenewalOutcome>;
    fn find_loan_by_id(&self, id: &str) -> LibraryResult<&Loan>;
    fn find_loans_by_patron(&self, patron_id: &str) -> Vec<&Loan>;
    fn query_overdue(&self, now: NaiveDateTime) -> Vec<&Loan>;
    fn events(&self) -> &[DomainEvent];
}

// Builds a loan and lends the copy in one step so a copy is never on loan without a loan
// record, nor a loan open against an available copy.
pub fn create_loan(kind: LoanKind, patron: &Patron, copy: &mut BookCopy, max_renewals: u32) -> LibraryResult<Loan> {
    let loan = Loan::new(kind, patron, copy).with_max_renewals(max_renewals);
    open_loan(loan, copy)
}

// Lends the copy for an already built loan, e.g. one carrying branch specific terms.
pub fn open_loan(loan: Loan, copy: &mut BookCopy) -> LibraryResult<Loan> {
    if loan.copy_id() != copy.id() {
        return Err(LibraryError::validation(format!("loan {} was not built for copy {}",
                                                    loan.id(), copy.id()).as_str(), Some("400".to_string())));
    }
    if !copy.is_available() {
        warn!(copy_id = copy.id().as_str(), "copy is already on loan");
        return Err(LibraryError::unavailable(format!("copy {} is already on loan",
                                                     copy.id()).as_str(), Some("409".to_string()), true));
    }
    copy.lend();
    info!(loan_id = loan.id().as_str(), kind = %loan.kind(), patron_id = loan.patron_id(), "loan created");
    Ok(loan)
}
