use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::domain::{Campus, Mentor, Student};

/// Reason string stamped on every match record, kept stable for downstream
/// report consumers.
pub const MATCH_REASON: &str = "Age Priority + Gender Rule + Campus Preference";

/// One student-to-mentor assignment, snapshotted at assignment time
///
/// Field renames reproduce the column headers of the published match sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Mentor Name")]
    pub mentor_name: String,
    #[serde(rename = "Student_Index")]
    pub student_id: usize,
    #[serde(rename = "Student_Age")]
    pub student_age: Option<u32>,
    #[serde(rename = "Student Gender Preference")]
    pub student_gender_preference: String,
    #[serde(rename = "Mentor_Index")]
    pub mentor_id: usize,
    #[serde(rename = "Mentor_Age")]
    pub mentor_age: Option<u32>,
    #[serde(rename = "Mentor_Title")]
    pub mentor_title: String,
    #[serde(rename = "Match_Reason")]
    pub match_reason: String,
    #[serde(
        rename = "Same_Campus_Match",
        serialize_with = "ser_yes_no",
        deserialize_with = "de_yes_no"
    )]
    pub same_campus_match: bool,
    #[serde(rename = "Assigned_Campus")]
    pub assigned_campus: Campus,
    #[serde(rename = "Student Phone")]
    pub student_phone: String,
    #[serde(rename = "Student Email")]
    pub student_email: String,
    #[serde(rename = "Student Personal Email")]
    pub student_personal_email: String,
    #[serde(rename = "Disability")]
    pub disability: String,
    #[serde(rename = "Activity Preference")]
    pub activity_preference: String,
}

impl MatchRecord {
    /// Snapshot an assignment of `student` to `mentor`
    pub fn new(student: &Student, mentor: &Mentor, same_campus: bool) -> Self {
        Self {
            mentor_name: mentor.name.clone(),
            student_id: student.id,
            student_age: student.age,
            student_gender_preference: student.preference_label.clone(),
            mentor_id: mentor.id,
            mentor_age: mentor.age,
            mentor_title: mentor.title.clone(),
            match_reason: MATCH_REASON.to_string(),
            same_campus_match: same_campus,
            assigned_campus: student.campus,
            student_phone: student.phone.clone(),
            student_email: student.email.clone(),
            student_personal_email: student.personal_email.clone(),
            disability: student.disability.clone(),
            activity_preference: student.activity_preference.clone(),
        }
    }
}

/// A student left without a mentor, as rendered in the unmatched report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedRecord {
    #[serde(rename = "Student_Index")]
    pub student_id: usize,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: Option<u32>,
    #[serde(rename = "Gender Preference")]
    pub gender_preference: String,
    #[serde(rename = "Faculty")]
    pub faculty: String,
    #[serde(rename = "Campus")]
    pub campus: Campus,
    #[serde(rename = "Title")]
    pub title: String,
}

impl From<&Student> for UnmatchedRecord {
    fn from(student: &Student) -> Self {
        Self {
            student_id: student.id,
            name: student.name.clone(),
            age: student.age,
            gender_preference: student.preference_label.clone(),
            faculty: student.faculty.clone(),
            campus: student.campus,
            title: student.title.clone(),
        }
    }
}

/// Summary of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_students: usize,
    pub total_mentors: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub max_mentees_per_mentor: u32,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

fn ser_yes_no<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

fn de_yes_no<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    match value.as_str() {
        "Yes" => Ok(true),
        "No" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected Yes or No, got {other:?}"
        ))),
    }
}
