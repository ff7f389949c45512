// Model exports
pub mod domain;
pub mod report;

pub use domain::{Campus, Gender, Mentor, Student};
pub use report::{MatchRecord, RunSummary, UnmatchedRecord, MATCH_REASON};
