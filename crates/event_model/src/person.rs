//! Persons and their links to contributions

use serde::{Deserialize, Serialize};

/// A person known to the host application (speaker, author, submitter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// First name field; for Russian-style records this often carries
    /// "Имя Отчество" in a single string.
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Patronymic / middle name, when the host records it separately
    pub middle_name: Option<String>,
    /// Free-text affiliation (institute, department, study group)
    pub affiliation: Option<String>,
}

impl Person {
    /// Create a person with just first and last name
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            affiliation: None,
        }
    }

    /// Set the affiliation
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }

    /// Set the middle name
    pub fn with_middle_name(mut self, middle_name: impl Into<String>) -> Self {
        self.middle_name = Some(middle_name.into());
        self
    }

    /// Abbreviated display name: `"Lastname F.M"` built from the last name
    /// and the first two characters of the first-name field. An empty first
    /// name yields empty initials rather than failing; a one-character first
    /// name yields a single initial.
    pub fn short_name(&self) -> String {
        let mut chars = self.first_name.chars();
        let first_initial = chars.next().map(String::from).unwrap_or_default();
        let second_initial = chars.next().map(String::from).unwrap_or_default();
        format!("{} {}.{}", self.last_name, first_initial, second_initial)
    }

    /// Full display name. With a middle name recorded this is
    /// `"Lastname Firstname Middlename"`, otherwise `"Firstname Lastname"`.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.last_name, self.first_name, middle),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Association between a [`Person`] and a contribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonLink {
    pub person: Person,
    /// Whether this person presents the contribution
    pub is_speaker: bool,
}

impl PersonLink {
    /// Link a person in the speaker role
    pub fn speaker(person: Person) -> Self {
        Self {
            person,
            is_speaker: true,
        }
    }

    /// Link a person without the speaker role (e.g. a co-author)
    pub fn non_speaker(person: Person) -> Self {
        Self {
            person,
            is_speaker: false,
        }
    }
}
