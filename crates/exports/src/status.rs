//! Speaker status derivation from free-text affiliation strings

use event_model::Person;

/// Affiliation fragments indicating undergraduate status
pub const STUDENT_KEYWORDS: &[&str] = &[
    "студент", "student", "бакалавр", "bachelor", "1 курс", "2 курс", "3 курс", "4 курс",
];

/// Affiliation fragments indicating master's-level status
pub const MASTER_KEYWORDS: &[&str] = &["магистр", "master", "магистрант", "5 курс", "6 курс"];

/// Label for a person with no affiliation recorded
pub const STATUS_NOT_SPECIFIED: &str = "Не указан";

/// Label for undergraduate students
pub const STATUS_STUDENT: &str = "Студент";

/// Label for master's students
pub const STATUS_MASTER: &str = "Магистр";

/// Derive the coarse status label for a speaker.
///
/// Student keywords are checked before master keywords, so an affiliation
/// matching both classifies as student. An affiliation matching neither set
/// is returned verbatim; only a missing affiliation yields
/// [`STATUS_NOT_SPECIFIED`].
pub fn speaker_status(person: &Person) -> String {
    let Some(affiliation) = &person.affiliation else {
        return STATUS_NOT_SPECIFIED.to_string();
    };

    let lower = affiliation.to_lowercase();

    if STUDENT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return STATUS_STUDENT.to_string();
    }
    if MASTER_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return STATUS_MASTER.to_string();
    }

    affiliation.clone()
}
