use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::parties::domain::Person;
use crate::utils::text::{deserialize_title_case, title_case};

// Author abstracts the writer of a book; the same author can be shared by many books.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Author {
    author_id: String,
    #[serde(deserialize_with = "deserialize_title_case")]
    name: String,
}

impl Author {
    pub fn new(name: &str) -> Self {
        Self {
            author_id: Uuid::new_v4().to_string(),
            name: title_case(name),
        }
    }
}

impl Identifiable for Author {
    fn id(&self) -> String {
        self.author_id.to_string()
    }
}

impl Person for Author {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Author: {}", self.name)
    }
}

// Patron abstracts library member who borrows copies. Contact fields can be changed freely.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Patron {
    patron_id: String,
    #[serde(deserialize_with = "deserialize_title_case")]
    name: String,
    pub phone: String,
    pub nationality: String,
}

impl Patron {
    pub fn new(name: &str, phone: &str, nationality: &str) -> Self {
        Self {
            patron_id: Uuid::new_v4().to_string(),
            name: title_case(name),
            phone: phone.to_string(),
            nationality: nationality.to_string(),
        }
    }
}

impl Identifiable for Patron {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }
}

impl Person for Patron {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Display for Patron {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Patron: {}, Phone: {}, Nationality: {}", self.name, self.phone, self.nationality)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::parties::domain::Person;
    use crate::parties::domain::model::{Author, Patron};

    #[tokio::test]
    async fn test_should_build_author() {
        let author = Author::new("j.k. rowling");
        assert_eq!("J.K. Rowling", author.name());
        assert_eq!("Author: J.K. Rowling", author.to_string());
        assert!(!author.id().is_empty());
    }

    #[tokio::test]
    async fn test_should_keep_capitalized_author_name() {
        let author = Author::new("J.K. Rowling");
        assert_eq!("J.K. Rowling", author.name());
    }

    #[tokio::test]
    async fn test_should_build_patron() {
        let patron = Patron::new("joão da silva", "1111-2222", "Brazilian");
        assert_eq!("João Da Silva", patron.name());
        assert_eq!("Patron: João Da Silva, Phone: 1111-2222, Nationality: Brazilian", patron.to_string());
    }

    #[tokio::test]
    async fn test_should_update_patron_contact() {
        let mut patron = Patron::new("ada lovelace", "1111-2222", "British");
        patron.phone = "3333-4444".to_string();
        patron.nationality = "Irish".to_string();
        assert_eq!("Patron: Ada Lovelace, Phone: 3333-4444, Nationality: Irish", patron.to_string());
    }

    #[tokio::test]
    async fn test_should_display_through_person() {
        let people: Vec<Box<dyn Person>> = vec![
            Box::new(Author::new("ursula le guin")),
            Box::new(Patron::new("alan turing", "5555", "British")),
        ];
        let displays: Vec<String> = people.iter().map(|p| p.to_string()).collect();
        assert_eq!("Author: Ursula Le Guin", displays[0].as_str());
        assert_eq!("Patron: Alan Turing, Phone: 5555, Nationality: British", displays[1].as_str());
    }

    #[tokio::test]
    async fn test_should_title_case_parsed_names() {
        let author: Author = serde_json::from_str(r#"{"author_id":"a1","name":"ursula LE GUIN"}"#)
            .expect("parse author");
        assert_eq!("Ursula Le Guin", author.name());
        let patron: Patron = serde_json::from_str(
            r#"{"patron_id":"p1","name":"alan turing","phone":"5555","nationality":"British"}"#)
            .expect("parse patron");
        assert_eq!("Alan Turing", patron.name());
        assert_eq!("p1", patron.id().as_str());
    }

    #[tokio::test]
    async fn test_should_generate_unique_ids() {
        assert_ne!(Author::new("a").id(), Author::new("a").id());
    }
}
