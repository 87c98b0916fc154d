use serde::{Deserialize, Deserializer};

/// Title-cases a name: the first letter of every run of cased letters is upper-cased and
/// the rest lower-cased. Anything without case (space, dot, hyphen, apostrophe, digits,
/// CJK ideographs) starts a new run, so "j.k. rowling" becomes "J.K. Rowling".
pub fn title_case(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_word = false;
    for c in raw.chars() {
        if c.is_lowercase() || c.is_uppercase() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

// deserialize_title_case keeps names read from json in the same shape as names given to new()
pub fn deserialize_title_case<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let name: String = Deserialize::deserialize(deserializer)?;
    Ok(title_case(name.as_str()))
}
