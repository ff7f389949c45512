use serde::{Deserialize, Serialize};

/// Gender derived from a courtesy title ("Mr."/"Ms.")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Campus code derived from a faculty name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Campus {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    Unknown,
}

impl std::fmt::Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Campus::One => write!(f, "1"),
            Campus::Two => write!(f, "2"),
            Campus::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A student awaiting mentor assignment
///
/// `id` is the student's position in the prepared input and is the identifier
/// carried into the reports. `age` is `None` when the raw value could not be
/// parsed; unknown ages sort after every known age in priority order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: usize,
    pub name: String,
    pub age: Option<u32>,
    /// Hard constraint on the mentor's gender; `None` means unconstrained
    pub preference: Option<Gender>,
    /// Raw preference text, carried into the reports untouched
    pub preference_label: String,
    pub campus: Campus,
    pub faculty: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub personal_email: String,
    pub disability: String,
    pub activity_preference: String,
}

/// A mentor with a per-run capacity for mentees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    pub id: usize,
    pub name: String,
    pub age: Option<u32>,
    pub gender: Gender,
    pub campus: Campus,
    pub faculty: String,
    pub title: String,
}
