// Core algorithm exports
pub mod filters;
pub mod ledger;
pub mod matcher;
pub mod priority;
pub mod scoring;

pub use filters::satisfies_gender_preference;
pub use ledger::CapacityLedger;
pub use matcher::{MatchOutcome, Matcher};
pub use priority::{age_priority, sort_by_age_priority};
pub use scoring::campus_score;
