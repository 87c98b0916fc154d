use std::collections::VecDeque;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::CopyStatus;
use crate::parties::domain::model::Author;
use crate::utils::date::serializer;

// BookCopy abstracts a single lendable instance (physical or digital) of a book. It refers
// back to its book by id only; the book owns the copy.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookCopy {
    copy_id: String,
    book_id: String,
    copy_status: CopyStatus,
    #[serde(with = "serializer")]
    pub acquired_at: NaiveDateTime,
}

impl BookCopy {
    pub fn new(book: &Book) -> Self {
        Self {
            copy_id: Uuid::new_v4().to_string(),
            book_id: book.id(),
            copy_status: CopyStatus::Available,
            acquired_at: Utc::now().naive_utc(),
        }
    }

    pub fn book_id(&self) -> &str {
        self.book_id.as_str()
    }

    pub fn status(&self) -> CopyStatus {
        self.copy_status
    }

    pub fn is_available(&self) -> bool {
        self.copy_status == CopyStatus::Available
    }

    // lending an already loaned copy leaves it on loan
    pub fn lend(&mut self) {
        debug!(copy_id = self.copy_id.as_str(), previous = %self.copy_status, "lending copy");
        self.copy_status = CopyStatus::OnLoan;
    }

    pub fn return_copy(&mut self) {
        debug!(copy_id = self.copy_id.as_str(), previous = %self.copy_status, "returning copy");
        self.copy_status = CopyStatus::Available;
    }
}

impl Identifiable for BookCopy {
    fn id(&self) -> String {
        self.copy_id.to_string()
    }
}

// Book abstracts a catalog entry and owns its copies in acquisition order. Authors are
// shared with other books.
#[derive(Debug, Clone)]
pub struct Book {
    book_id: String,
    pub title: String,
    pub publisher: String,
    pub authors: Vec<Rc<Author>>,
    pub genres: Vec<String>,
    copies: VecDeque<BookCopy>,
    pub created_at: NaiveDateTime,
}

impl Book {
    pub fn new(title: &str, publisher: &str, authors: Vec<Rc<Author>>, genres: &[&str]) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            publisher: publisher.to_string(),
            authors,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            copies: VecDeque::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    // creates a copy that refers to this book; it still has to be added with add_copy
    pub fn new_copy(&self) -> BookCopy {
        BookCopy::new(self)
    }

    // the caller is responsible for adding only copies of this book
    pub fn add_copy(&mut self, copy: BookCopy) {
        self.copies.push_back(copy);
    }

    // removes the oldest copy regardless of whether it is currently on loan
    pub fn remove_copy(&mut self) -> Option<BookCopy> {
        self.copies.pop_front()
    }

    pub fn available_copies(&self) -> usize {
        self.copies.iter().filter(|c| c.is_available()).count()
    }

    pub fn has_available_copies(&self) -> bool {
        self.available_copies() > 0
    }

    pub fn copies(&self) -> impl Iterator<Item = &BookCopy> {
        self.copies.iter()
    }

    pub fn copy(&self, copy_id: &str) -> Option<&BookCopy> {
        self.copies.iter().find(|c| c.copy_id == copy_id)
    }

    pub fn copy_mut(&mut self, copy_id: &str) -> Option<&mut BookCopy> {
        self.copies.iter_mut().find(|c| c.copy_id == copy_id)
    }

    pub fn first_available_copy_mut(&mut self) -> Option<&mut BookCopy> {
        self.copies.iter_mut().find(|c| c.is_available())
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let authors = self.authors.iter().map(|a| a.to_string()).collect::<Vec<String>>().join(", ");
        write!(f, "{}, {}, {} - {}", self.title, authors, self.publisher, self.available_copies())
    }
}
