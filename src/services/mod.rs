// Service exports
pub mod prep;
pub mod report;
pub mod roster;

pub use prep::{prepare_mentors, prepare_students, PrepError};
pub use report::{ReportSink, SinkError};
pub use roster::{RawTable, RosterSource, SourceError};
