use crate::{
    field::{Field, FieldSpec, FieldValueType},
    normalize::normalize,
    Error, Result,
};
use chrono::{Datelike, Days, Months, NaiveDateTime, TimeDelta, Timelike};
use std::{fmt::Display, str::FromStr};

/// Occurrence search gives up this many years after the reference instant.
pub const SEARCH_HORIZON_YEARS: u32 = 5;

/// A validated cron schedule: the 5 parsed fields plus the normalized expression.
///
/// For the expression format and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schedule {
    minute: FieldSpec,
    hour: FieldSpec,
    dom: FieldSpec,
    month: FieldSpec,
    dow: FieldSpec,
    normalized: String,
}

impl Schedule {
    /// Normalizes, parses and validates the provided `expression` and constructs a [`Schedule`].
    ///
    /// Named shortcuts (`@weekly` etc.) are substituted before parsing.
    /// Returns [`Error`] in case the expression is unparsable or violates a field's domain.
    pub fn new(expression: impl AsRef<str>) -> Result<Self> {
        let normalized = normalize(expression.as_ref().trim());
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(Error::WrongFieldCount(tokens.len()));
        }

        Ok(Self {
            minute: FieldSpec::parse(Field::Minute, tokens[0])?,
            hour: FieldSpec::parse(Field::Hour, tokens[1])?,
            dom: FieldSpec::parse(Field::DayOfMonth, tokens[2])?,
            month: FieldSpec::parse(Field::Month, tokens[3])?,
            dow: FieldSpec::parse(Field::DayOfWeek, tokens[4])?,
            normalized: tokens.join(" "),
        })
    }

    /// The normalized 5-field expression the schedule was parsed from.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The minute field.
    pub fn minute(&self) -> &FieldSpec {
        &self.minute
    }

    /// The hour field.
    pub fn hour(&self) -> &FieldSpec {
        &self.hour
    }

    /// The day-of-month field.
    pub fn day_of_month(&self) -> &FieldSpec {
        &self.dom
    }

    /// The month field.
    pub fn month(&self) -> &FieldSpec {
        &self.month
    }

    /// The day-of-week field.
    pub fn day_of_week(&self) -> &FieldSpec {
        &self.dow
    }

    /// Returns `true` if the minute-aligned `timestamp` satisfies the schedule.
    pub fn matches(&self, timestamp: &NaiveDateTime) -> bool {
        self.minute.matches(timestamp.minute() as FieldValueType)
            && self.hour.matches(timestamp.hour() as FieldValueType)
            && self.month.matches(timestamp.month() as FieldValueType)
            && self.day_matches(timestamp)
    }

    /// Day-of-month and day-of-week combine with OR semantics when both are
    /// restricted; a `*` on either side leaves the decision to the other one.
    fn day_matches(&self, timestamp: &NaiveDateTime) -> bool {
        let dom_matched = self.dom.matches(timestamp.day() as FieldValueType);
        let dow_matched = self
            .dow
            .matches(timestamp.weekday().num_days_from_sunday() as FieldValueType);

        match (self.dom.is_any(), self.dow.is_any()) {
            (true, true) => true,
            (false, true) => dom_matched,
            (true, false) => dow_matched,
            (false, false) => dom_matched || dow_matched,
        }
    }

    /// Returns the first occurrence strictly after `after`, at minute granularity.
    ///
    /// Returns `None` if no candidate matches within [`SEARCH_HORIZON_YEARS`].
    pub fn upcoming(&self, after: &NaiveDateTime) -> Option<NaiveDateTime> {
        let start = after.with_second(0)?.with_nanosecond(0)? + TimeDelta::minutes(1);
        let horizon = start.checked_add_months(Months::new(12 * SEARCH_HORIZON_YEARS))?;

        let mut candidate = start;
        while candidate <= horizon {
            if !self.month.matches(candidate.month() as FieldValueType) {
                candidate = next_month_start(&candidate)?;
            } else if !self.day_matches(&candidate) {
                candidate = next_day_start(&candidate)?;
            } else if !self.hour.matches(candidate.hour() as FieldValueType) {
                candidate = next_hour_start(&candidate)?;
            } else if !self.minute.matches(candidate.minute() as FieldValueType) {
                candidate += TimeDelta::minutes(1);
            } else {
                return Some(candidate);
            }
        }

        None
    }

    /// Returns an iterator of occurrences strictly after `after`, in ascending order.
    ///
    /// Each call builds an independent iterator; no state survives across calls.
    pub fn iter(&self, after: &NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        ScheduleIterator {
            schedule: self.clone(),
            next: self.upcoming(after),
        }
    }

    /// Consumes the [`Schedule`] and returns an iterator of occurrences strictly after `after`.
    pub fn into_iter(self, after: &NaiveDateTime) -> impl Iterator<Item = NaiveDateTime> {
        let next = self.upcoming(after);
        ScheduleIterator { schedule: self, next }
    }

    /// Collects the next `count` occurrences strictly after `after`, ascending.
    ///
    /// Fails with [`Error::NoOccurrenceFound`] if the schedule runs dry within
    /// the search horizon before `count` occurrences are found.
    pub fn next_occurrences(&self, after: &NaiveDateTime, count: usize) -> Result<Vec<NaiveDateTime>> {
        let occurrences: Vec<_> = self.iter(after).take(count).collect();
        if occurrences.len() < count {
            return Err(Error::NoOccurrenceFound);
        }
        Ok(occurrences)
    }
}

/// Contains iterator state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ScheduleIterator {
    schedule: Schedule,
    next: Option<NaiveDateTime>,
}

impl Iterator for ScheduleIterator {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.upcoming(&current);
        Some(current)
    }
}

impl FromStr for Schedule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Schedule {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.dom, self.month, self.dow
        )
    }
}

fn next_month_start(timestamp: &NaiveDateTime) -> Option<NaiveDateTime> {
    timestamp
        .date()
        .with_day(1)?
        .checked_add_months(Months::new(1))?
        .and_hms_opt(0, 0, 0)
}

fn next_day_start(timestamp: &NaiveDateTime) -> Option<NaiveDateTime> {
    timestamp
        .date()
        .checked_add_days(Days::new(1))?
        .and_hms_opt(0, 0, 0)
}

fn next_hour_start(timestamp: &NaiveDateTime) -> Option<NaiveDateTime> {
    Some(timestamp.with_minute(0)? + TimeDelta::hours(1))
}
