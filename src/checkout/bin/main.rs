use std::rc::Rc;
use lending::books::domain::model::Book;
use lending::checkout::domain::create_loan;
use lending::core::library::{LibraryError, LibraryResult, LoanKind};
use lending::parties::domain::model::{Author, Patron};
use lending::parties::domain::Person;
use lending::utils::trace::{setup_json_tracing, setup_tracing};

const LOG_FORMAT_ENV: &str = "LENDING_LOG_FORMAT";

fn main() -> LibraryResult<()> {
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(format) if format == "json" => setup_json_tracing(),
        _ => setup_tracing(),
    }

    let author = Rc::new(Author::new("J.K. Rowling"));
    let mut book = Book::new("Harry Potter and the Philosopher's Stone", "Rocco",
                             vec![author], &["Fantasy", "Adventure"]);
    let first = book.new_copy();
    book.add_copy(first);
    let second = book.new_copy();
    book.add_copy(second);
    let patron = Patron::new("João da Silva", "1111-2222", "Brazilian");

    let copy = book.first_available_copy_mut()
        .ok_or_else(|| LibraryError::unavailable("no copy available", None, false))?;
    let mut loan = create_loan(LoanKind::Physical, &patron, copy, 2)?;
    loan.return_loan(copy)?;

    println!("Loan Kind: {}", loan.loan_kind());
    println!("Patron: {}", patron.name());
    println!("Book: {}", book.title);
    println!("Loan Date: {}", loan.loan_at());
    println!("Return Date: {}", loan.returned_at().map(|d| d.to_string()).unwrap_or_default());
    println!("Loan Status: {}", loan.status());
    println!("Available copies of '{}': {}", book.title, book.available_copies());
    Ok(())
}
