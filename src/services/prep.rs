use thiserror::Error;

use crate::models::{Campus, Gender, Mentor, Student};
use crate::services::roster::RawTable;

// Normalized column names expected from the roster source.
const TITLE: &str = "mr./ms.";
const FACULTY: &str = "faculty";
const AGE: &str = "age";
const NAME: &str = "name";
const GENDER_PREFERENCE: &str = "gender_preference";
const PHONE: &str = "student_phone";
const EMAIL: &str = "student_email";
const PERSONAL_EMAIL: &str = "student_personal_email";
const DISABILITY: &str = "disability";
const ACTIVITY: &str = "activity_1";

const CAMPUS_ONE_KEYS: [&str; 2] = ["Business", "Medicine"];
const CAMPUS_TWO_KEYS: [&str; 1] = ["Law"];

/// Errors raised while deriving typed records from raw rows
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("Required column '{column}' is missing from the {table} table")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// Derive typed student records from the raw students table
///
/// Aborts on a missing required column. An unparseable age is non-fatal: the
/// record proceeds with an unknown age and a warning is logged.
pub fn prepare_students(table: &RawTable) -> Result<Vec<Student>, PrepError> {
    for column in [
        TITLE,
        FACULTY,
        AGE,
        NAME,
        PHONE,
        EMAIL,
        PERSONAL_EMAIL,
        DISABILITY,
        ACTIVITY,
    ] {
        require_column(table, "students", column)?;
    }

    let students = table
        .rows
        .iter()
        .enumerate()
        .map(|(id, row)| {
            let get = |column: &str| row.get(column).cloned().unwrap_or_default();
            let raw_age = get(AGE);
            let age = parse_age(&raw_age);
            if age.is_none() {
                tracing::warn!(
                    "Student row {}: age {:?} could not be parsed, treating as unknown",
                    id,
                    raw_age
                );
            }

            let preference_label = get(GENDER_PREFERENCE);

            Student {
                id,
                name: get(NAME),
                age,
                preference: parse_preference(&preference_label),
                preference_label,
                campus: assign_campus(&get(FACULTY)),
                faculty: get(FACULTY),
                title: get(TITLE),
                phone: get(PHONE),
                email: get(EMAIL),
                personal_email: get(PERSONAL_EMAIL),
                disability: get(DISABILITY),
                activity_preference: get(ACTIVITY),
            }
        })
        .collect();

    Ok(students)
}

/// Derive typed mentor records from the raw mentors table
pub fn prepare_mentors(table: &RawTable) -> Result<Vec<Mentor>, PrepError> {
    for column in [TITLE, FACULTY, AGE, NAME] {
        require_column(table, "mentors", column)?;
    }

    let mentors = table
        .rows
        .iter()
        .enumerate()
        .map(|(id, row)| {
            let get = |column: &str| row.get(column).cloned().unwrap_or_default();
            let raw_age = get(AGE);
            let age = parse_age(&raw_age);
            if age.is_none() {
                tracing::warn!(
                    "Mentor row {}: age {:?} could not be parsed, treating as unknown",
                    id,
                    raw_age
                );
            }

            Mentor {
                id,
                name: get(NAME),
                age,
                gender: map_title_to_gender(&get(TITLE)),
                campus: assign_campus(&get(FACULTY)),
                faculty: get(FACULTY),
                title: get(TITLE),
            }
        })
        .collect();

    Ok(mentors)
}

fn require_column(
    table: &RawTable,
    name: &'static str,
    column: &'static str,
) -> Result<(), PrepError> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(PrepError::MissingColumn {
            table: name,
            column,
        })
    }
}

/// Map a courtesy title to a gender
///
/// Literal substring rule, `"mr"` checked first: a title containing `"mr"`
/// is `Male` (so "Mrs." also lands there), else one containing `"ms"` is
/// `Female`, else `Unknown`.
pub fn map_title_to_gender(title: &str) -> Gender {
    let title = title.trim().to_lowercase();
    if title.contains("mr") {
        Gender::Male
    } else if title.contains("ms") {
        Gender::Female
    } else {
        Gender::Unknown
    }
}

/// Map a faculty name to a campus code by keyword
pub fn assign_campus(faculty: &str) -> Campus {
    if CAMPUS_ONE_KEYS.iter().any(|key| faculty.contains(key)) {
        Campus::One
    } else if CAMPUS_TWO_KEYS.iter().any(|key| faculty.contains(key)) {
        Campus::Two
    } else {
        Campus::Unknown
    }
}

/// Extract the first run of ASCII digits from a free-text age value
pub fn parse_age(raw: &str) -> Option<u32> {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}

/// Interpret a raw gender-preference value as a hard constraint
///
/// Only the literal values `Male` and `Female` constrain; anything else
/// (empty, "No preference", ...) leaves the student unconstrained.
pub fn parse_preference(raw: &str) -> Option<Gender> {
    match raw.trim() {
        "Male" => Some(Gender::Male),
        "Female" => Some(Gender::Female),
        _ => None,
    }
}
