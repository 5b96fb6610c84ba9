//! Assembles the full interpretation of a cron expression.

use crate::{describe::describe, schedule::Schedule, warnings::detect_warnings, Result};
use chrono::NaiveDateTime;

/// Number of occurrences computed when the caller doesn't ask for a specific count.
pub const DEFAULT_OCCURRENCES: usize = 5;

/// Display form of each of the 5 parsed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBreakdown {
    /// Minute field token.
    pub minutes: String,
    /// Hour field token.
    pub hours: String,
    /// Day-of-month field token.
    pub day_of_month: String,
    /// Month field token.
    pub month: String,
    /// Day-of-week field token.
    pub day_of_week: String,
}

impl From<&Schedule> for FieldBreakdown {
    fn from(schedule: &Schedule) -> Self {
        Self {
            minutes: schedule.minute().to_string(),
            hours: schedule.hour().to_string(),
            day_of_month: schedule.day_of_month().to_string(),
            month: schedule.month().to_string(),
            day_of_week: schedule.day_of_week().to_string(),
        }
    }
}

/// Everything the interpreter has to say about one expression.
///
/// Constructed fresh per call; owns no shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    /// The normalized 5-field expression.
    pub expression: String,
    /// The reference instant occurrence computation was anchored to.
    pub reference: NaiveDateTime,
    /// The next occurrences strictly after the reference instant, ascending.
    pub next_occurrences: Vec<NaiveDateTime>,
    /// Human-readable description of the schedule.
    pub description: String,
    /// Per-field breakdown.
    pub fields: FieldBreakdown,
    /// Heuristic warnings, possibly empty.
    pub warnings: Vec<String>,
}

/// Interprets a raw expression against the given reference instant.
///
/// Runs the whole pipeline: normalization, parsing/validation, occurrence
/// computation (`count` occurrences), description and warning detection.
pub fn interpret(expression: &str, reference: &NaiveDateTime, count: usize) -> Result<Interpretation> {
    let schedule = Schedule::new(expression)?;
    let next_occurrences = schedule.next_occurrences(reference, count)?;

    Ok(Interpretation {
        expression: schedule.normalized().to_owned(),
        reference: *reference,
        next_occurrences,
        description: describe(&schedule),
        fields: FieldBreakdown::from(&schedule),
        warnings: detect_warnings(schedule.normalized()),
    })
}
