use std::collections::HashMap;
use chrono::NaiveDateTime;
use tracing::warn;
use crate::books::domain::model::Book;
use crate::checkout::domain::{open_loan, LendingService};
use crate::checkout::domain::model::{Loan, RenewalOutcome};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, LoanKind};
use crate::parties::domain::model::Patron;

pub struct LendingServiceImpl {
    branch_id: String,
    max_renewals: u32,
    loan_days: i64,
    books: HashMap<String, Book>,
    patrons: HashMap<String, Patron>,
    loans: Vec<Loan>,
    events: Vec<DomainEvent>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            max_renewals: config.max_renewals,
            loan_days: config.loan_days,
            books: HashMap::new(),
            patrons: HashMap::new(),
            loans: vec![],
            events: vec![],
        }
    }

    fn loan_mut(&mut self, loan_id: &str) -> LibraryResult<&mut Loan> {
        self.loans.iter_mut().find(|l| l.id() == loan_id)
            .ok_or_else(|| LibraryError::not_found(format!("loan with id {} not found", loan_id).as_str()))
    }
}

impl LendingService for LendingServiceImpl {
    fn add_book(&mut self, book: Book) -> LibraryResult<String> {
        let id = book.id();
        if self.books.contains_key(&id) {
            return Err(LibraryError::validation(format!("book {} is already registered", id).as_str(), Some("409".to_string())));
        }
        self.books.insert(id.to_string(), book);
        Ok(id)
    }

    fn find_book_by_id(&self, id: &str) -> LibraryResult<&Book> {
        self.books.get(id)
            .ok_or_else(|| LibraryError::not_found(format!("book with id {} not found", id).as_str()))
    }

    fn add_patron(&mut self, patron: Patron) -> LibraryResult<String> {
        let id = patron.id();
        if self.patrons.contains_key(&id) {
            return Err(LibraryError::validation(format!("patron {} is already registered", id).as_str(), Some("409".to_string())));
        }
        self.patrons.insert(id.to_string(), patron);
        Ok(id)
    }

    fn update_patron(&mut self, patron: Patron) -> LibraryResult<()> {
        match self.patrons.get_mut(&patron.id()) {
            Some(existing) => {
                *existing = patron;
                Ok(())
            }
            None => Err(LibraryError::not_found(format!("patron with id {} not found", patron.id()).as_str())),
        }
    }

    fn find_patron_by_id(&self, id: &str) -> LibraryResult<&Patron> {
        self.patrons.get(id)
            .ok_or_else(|| LibraryError::not_found(format!("patron with id {} not found", id).as_str()))
    }

    fn checkout(&mut self, patron_id: &str, book_id: &str, kind: LoanKind) -> LibraryResult<Loan> {
        let patron = self.patrons.get(patron_id)
            .ok_or_else(|| LibraryError::not_found(format!("patron with id {} not found", patron_id).as_str()))?;
        let book = self.books.get_mut(book_id)
            .ok_or_else(|| LibraryError::not_found(format!("book with id {} not found", book_id).as_str()))?;
        let copy = match book.first_available_copy_mut() {
            Some(copy) => copy,
            None => {
                warn!(book_id, "no copy available for checkout");
                return Err(LibraryError::unavailable(format!("book {} has no available copies",
                                                             book_id).as_str(), Some("409".to_string()), true));
            }
        };
        let loan = Loan::new(kind, patron, copy)
            .with_max_renewals(self.max_renewals)
            .with_loan_days(self.loan_days)?;
        let loan = open_loan(loan, copy)?;
        self.events.push(DomainEvent::loan_created(self.branch_id.as_str(), &loan));
        self.loans.push(loan.clone());
        Ok(loan)
    }

    fn returned(&mut self, loan_id: &str) -> LibraryResult<Loan> {
        let loan = self.loans.iter_mut().find(|l| l.id() == loan_id)
            .ok_or_else(|| LibraryError::not_found(format!("loan with id {} not found", loan_id).as_str()))?;
        let copy = self.books.get_mut(loan.book_id())
            .and_then(|b| b.copy_mut(loan.copy_id()))
            .ok_or_else(|| LibraryError::not_found(format!("copy {} of loan {} not found",
                                                           loan.copy_id(), loan_id).as_str()))?;
        loan.return_loan(copy)?;
        let loan = loan.clone();
        self.events.push(DomainEvent::loan_returned(self.branch_id.as_str(), &loan));
        Ok(loan)
    }

    fn renew(&mut self, loan_id: &str) -> LibraryResult<RenewalOutcome> {
        let loan = self.loan_mut(loan_id)?;
        let outcome = loan.renew();
        if let RenewalOutcome::Renewed { .. } = outcome {
            let loan = loan.clone();
            self.events.push(DomainEvent::loan_renewed(self.branch_id.as_str(), &loan));
        }
        Ok(outcome)
    }

    fn find_loan_by_id(&self, id: &str) -> LibraryResult<&Loan> {
        self.loans.iter().find(|l| l.id() == id)
            .ok_or_else(|| LibraryError::not_found(format!("loan with id {} not found", id).as_str()))
    }

    fn find_loans_by_patron(&self, patron_id: &str) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.patron_id() == patron_id).collect()
    }

    fn query_overdue(&self, now: NaiveDateTime) -> Vec<&Loan> {
        self.loans.iter().filter(|l| l.is_overdue(now)).collect()
    }

    fn events(&self) -> &[DomainEvent] {
        self.events.as_slice()
    }
}
