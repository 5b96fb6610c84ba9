//! Cron expression interpreter: parser, occurrence calculator and describer.
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! This crate takes a standard 5-field cron expression and:
//! - parses and validates it with typed, field-aware errors;
//! - computes the next occurrences after any reference instant;
//! - renders a human-readable description of the schedule;
//! - flags known footguns (leap-year-only schedules, interval steps).
//!
//! A thin HTTP boundary over the same pipeline lives in [`server`];
//! the `cron-interpreter` binary serves it.
//!
//! ## Cron expression format
//!
//! Expressions have exactly 5 whitespace-separated fields:
//!
//! | Field        | Allowed values  | Allowed forms |
//! |--------------|-----------------|---------------|
//! | Minute       | 0-59            | * , - /       |
//! | Hour         | 0-23            | * , - /       |
//! | Day of Month | 1-31            | * , - /       |
//! | Month        | 1-12 or JAN-DEC | * , - /       |
//! | Day of Week  | 0-7 or SUN-SAT  | * , - /       |
//!
//! Form meanings:
//! - `*` - every possible value;
//! - `,` - list of values or forms, i.e. `1,7,12`, `SUN,FRI`, `1,10-15`;
//! - `-` - inclusive range, i.e. `0-15`, `JAN-MAR` (no wraparound: `22-2` is rejected);
//! - `/` - step, i.e. `*/12` (whole domain), `10/5` (from 10 to the maximum), `30-59/2`.
//!
//! Month and day-of-week accept case-insensitive 3-letter names. Day-of-week
//! `7` is accepted as an alias for Sunday and normalized to `0`.
//!
//! When both day fields are restricted, a day matches if **either** field
//! matches (classic cron OR semantics); a `*` on one side defers entirely to
//! the other.
//!
//! Named shortcuts are substituted before parsing:
//!
//! | Shortcut                   | Expression |
//! |----------------------------|------------|
//! | `@yearly` (or `@annually`) | 0 0 1 1 *  |
//! | `@monthly`                 | 0 0 1 * *  |
//! | `@weekly`                  | 0 0 * * 0  |
//! | `@daily` (or `@midnight`)  | 0 0 * * *  |
//! | `@hourly`                  | 0 * * * *  |
//!
//! ## How to use
//!
//! [`Schedule`] is the central type: [`Schedule::new`] parses and validates,
//! [`Schedule::upcoming`] returns the next occurrence strictly after a given
//! instant, and [`Schedule::iter`] produces the occurrence series. Occurrence
//! search gives up 5 years past the reference instant, so schedules that can
//! never fire (e.g. `0 0 30 2 *`) fail with [`Error::NoOccurrenceFound`]
//! instead of looping forever.
//!
//! ### Example with `upcoming`
//! ```rust
//! use chrono::NaiveDateTime;
//! use cron_interpreter::{Result, Schedule};
//!
//! fn upcoming() -> Result<()> {
//!     let schedule = Schedule::new("*/15 14 1,15 * 2-5")?;
//!     let after = NaiveDateTime::parse_from_str("2024-01-01T00:00:00", "%Y-%m-%dT%H:%M:%S")
//!         .unwrap();
//!
//!     // First fire time strictly after the reference instant
//!     let next = schedule.upcoming(&after);
//!     assert_eq!(next.unwrap().to_string(), "2024-01-01 14:00:00");
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Example with the full pipeline
//! ```rust
//! use chrono::NaiveDateTime;
//! use cron_interpreter::{interpret, Result};
//!
//! fn pipeline() -> Result<()> {
//!     let now = NaiveDateTime::parse_from_str("2024-01-01T00:00:00", "%Y-%m-%dT%H:%M:%S")
//!         .unwrap();
//!     let result = interpret("@weekly", &now, 5)?;
//!
//!     assert_eq!(result.expression, "0 0 * * 0");
//!     assert_eq!(result.description, "At 12:00 AM, only on Sunday");
//!     assert_eq!(result.next_occurrences.len(), 5);
//!
//!     Ok(())
//! }
//! ```

mod describe;
/// Crate specific Error implementation.
pub mod error;
mod field;
mod interpret;
mod normalize;
/// Cron expression parser and upcoming occurrence generator.
pub mod schedule;
/// HTTP boundary over the interpretation pipeline.
pub mod server;
mod warnings;

// Re-export of public entities.
pub use describe::describe;
pub use error::Error;
pub use field::{Field, FieldSpec, FieldValueType, Matcher};
pub use interpret::{interpret, FieldBreakdown, Interpretation, DEFAULT_OCCURRENCES};
pub use normalize::{normalize, NAMED_SCHEDULES};
pub use schedule::{Schedule, SEARCH_HORIZON_YEARS};
pub use warnings::detect_warnings;

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
