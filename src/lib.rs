pub mod books;
pub mod checkout;
pub mod parties;

pub mod core {
    pub mod domain;
    pub mod events;
    pub mod library;
}

pub mod utils {
    pub mod date;
    pub mod text;
    pub mod trace;
}
