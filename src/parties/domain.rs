use std::fmt::Display;
use crate::core::domain::Identifiable;

pub mod model;

// Person is the identity shared by authors and patrons. The name is normalized once on
// construction and only exposed read-only; each variant supplies its own display string.
pub trait Person: Identifiable + Display {
    fn name(&self) -> &str;
}
