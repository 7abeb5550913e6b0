use std::fmt;

use super::error::NameError;

/// A student name that has passed validation.
///
/// Words are separated by single spaces. Every word is made of letters only,
/// starts with an uppercase letter and continues without uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentName(String);

impl StudentName {
    pub fn parse(value: &str) -> Result<Self, NameError> {
        if value.is_empty() {
            return Err(NameError::NotAlphabetic);
        }

        let words: Vec<&str> = value.split(' ').collect();

        // Letters first, then casing: "ivan1" reports the digit, not the case.
        if words
            .iter()
            .any(|w| w.is_empty() || !w.chars().all(is_letter))
        {
            return Err(NameError::NotAlphabetic);
        }

        if !words.iter().all(|w| is_title_word(w)) {
            return Err(NameError::NotTitleCase);
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Alphabetic, minus letter-like numerals such as Roman numeral signs.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

fn is_title_word(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && !chars.any(char::is_uppercase),
        None => false,
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StudentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
