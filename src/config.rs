use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Where the student and mentor tables come from
///
/// `students` and `mentors` may point at the same workbook (named sheets)
/// or at separate CSV files. The defaults reproduce the original single
/// workbook layout.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSettings {
    #[serde(default = "default_roster_file")]
    pub students: String,
    #[serde(default = "default_roster_file")]
    pub mentors: String,
    #[serde(default = "default_students_sheet")]
    pub students_sheet: String,
    #[serde(default = "default_mentors_sheet")]
    pub mentors_sheet: String,
}

impl Default for RosterSettings {
    fn default() -> Self {
        Self {
            students: default_roster_file(),
            mentors: default_roster_file(),
            students_sheet: default_students_sheet(),
            mentors_sheet: default_mentors_sheet(),
        }
    }
}

fn default_roster_file() -> String {
    "mentors.xlsx".to_string()
}
fn default_students_sheet() -> String {
    "Students".to_string()
}
fn default_mentors_sheet() -> String {
    "Mentors".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Uniform per-mentor capacity; 0 yields zero matches
    #[serde(default = "default_capacity")]
    pub max_mentees_per_mentor: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_mentees_per_mentor: default_capacity(),
        }
    }
}

fn default_capacity() -> u32 {
    11
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_matches_path")]
    pub matches: String,
    #[serde(default = "default_unmatched_path")]
    pub unmatched: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            matches: default_matches_path(),
            unmatched: default_unmatched_path(),
        }
    }
}

fn default_matches_path() -> String {
    "mentor_matches_final.csv".to_string()
}
fn default_unmatched_path() -> String {
    "unmatched_students.csv".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with COHORT_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. COHORT_MATCHING__MAX_MENTEES_PER_MENTOR -> matching.max_mentees_per_mentor
            .add_source(
                Environment::with_prefix("COHORT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("COHORT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
