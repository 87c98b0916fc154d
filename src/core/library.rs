use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Raised when a copy or a book has nothing left to lend. The caller can retry once
    // another loan has been returned.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for lending operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum CopyStatus {
    Available,
    OnLoan,
}

impl Display for CopyStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CopyStatus::Available => write!(f, "Available"),
            CopyStatus::OnLoan => write!(f, "OnLoan"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanStatus {
    OnLoan,
    Returned,
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanStatus::OnLoan => write!(f, "OnLoan"),
            LoanStatus::Returned => write!(f, "Returned"),
        }
    }
}

// LoanKind tags the two loan variants; it is the only behavioral difference between them.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum LoanKind {
    Physical,
    Digital,
}

impl LoanKind {
    pub fn label(&self) -> &'static str {
        match self {
            LoanKind::Physical => "Physical Loan",
            LoanKind::Digital => "Digital Loan",
        }
    }
}

impl Display for LoanKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LoanKind::Physical => write!(f, "Physical"),
            LoanKind::Digital => write!(f, "Digital"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{CopyStatus, LibraryError, LoanKind, LoanStatus};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_unavailable_error() {
        assert!(matches!(LibraryError::unavailable("test", None, false), LibraryError::CurrentlyUnavailable{ message: _, reason_code: _, retryable: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
        let err = serde_json::from_str::<LoanStatus>("not json").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_retryable_error() {
        assert_eq!(false, LibraryError::not_found("test").retryable());
        assert_eq!(false, LibraryError::unavailable("test", None, false).retryable());
        assert_eq!(true, LibraryError::unavailable("test", None, true).retryable());
        assert_eq!(false, LibraryError::validation("test", None).retryable());
        assert_eq!(false, LibraryError::serialization("test").retryable());
    }

    #[tokio::test]
    async fn test_should_format_error() {
        assert_eq!("missing", LibraryError::not_found("missing").to_string());
        assert_eq!("bad Some(\"400\")", LibraryError::validation("bad", Some("400".to_string())).to_string());
    }

    #[tokio::test]
    async fn test_should_format_statuses() {
        assert_eq!("Available", CopyStatus::Available.to_string());
        assert_eq!("OnLoan", CopyStatus::OnLoan.to_string());
        assert_eq!("OnLoan", LoanStatus::OnLoan.to_string());
        assert_eq!("Returned", LoanStatus::Returned.to_string());
    }

    #[tokio::test]
    async fn test_should_reject_unknown_status_names() {
        assert_eq!(LoanStatus::Returned, serde_json::from_str::<LoanStatus>("\"Returned\"").expect("parse status"));
        assert!(serde_json::from_str::<CopyStatus>("\"Lost\"").is_err());
        assert!(serde_json::from_str::<LoanKind>("\"Audio\"").is_err());
    }

    #[tokio::test]
    async fn test_should_label_loan_kind() {
        assert_eq!("Physical Loan", LoanKind::Physical.label());
        assert_eq!("Digital Loan", LoanKind::Digital.label());
        assert_eq!("Physical", LoanKind::Physical.to_string());
        assert_eq!("Digital", LoanKind::Digital.to_string());
    }
}
