use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::core::Matcher;
use crate::models::RunSummary;
use crate::services::{
    prepare_mentors, prepare_students, PrepError, ReportSink, RosterSource, SinkError, SourceError,
};

/// A collaborator failure that aborts the run
///
/// The matching engine itself has no error paths; everything here comes from
/// the roster source, the data preparation, or the report sink. There is no
/// partial-result recovery.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Prep(#[from] PrepError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Run the full pipeline: roster source, preparation, matching, reports
pub fn run(settings: &Settings) -> Result<RunSummary, PipelineError> {
    let source = RosterSource::from_settings(&settings.roster);

    info!(
        "Loading roster (students: {}, mentors: {})",
        settings.roster.students, settings.roster.mentors
    );
    let students_raw = source.load_students()?;
    let mentors_raw = source.load_mentors()?;
    info!(
        "Loaded {} student rows and {} mentor rows",
        students_raw.rows.len(),
        mentors_raw.rows.len()
    );

    let students = prepare_students(&students_raw)?;
    let mentors = prepare_mentors(&mentors_raw)?;
    info!("Prepared {} students and {} mentors", students.len(), mentors.len());

    let capacity = settings.matching.max_mentees_per_mentor;
    let matcher = Matcher::new(capacity);
    let outcome = matcher.assign(&students, &mentors);
    info!(
        "Matched {} of {} students ({} unmatched)",
        outcome.matches.len(),
        students.len(),
        outcome.unmatched.len()
    );

    let sink = ReportSink::from_settings(&settings.report);
    sink.write(&outcome)?;

    Ok(RunSummary {
        total_students: students.len(),
        total_mentors: mentors.len(),
        matched: outcome.matches.len(),
        unmatched: outcome.unmatched.len(),
        max_mentees_per_mentor: capacity,
        generated_at: chrono::Utc::now(),
    })
}
