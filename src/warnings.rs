//! Heuristic detection of unusual schedule patterns.

/// A single detection rule over the normalized expression.
type Rule = fn(&str) -> Option<&'static str>;

/// Rules are evaluated in order; each contributes at most one warning.
const RULES: [Rule; 2] = [leap_year_only, uses_intervals];

/// Scans a normalized expression for known footguns.
///
/// Pure and total; returns warnings in rule evaluation order, possibly empty.
pub fn detect_warnings(normalized: &str) -> Vec<String> {
    RULES
        .iter()
        .filter_map(|rule| rule(normalized))
        .map(str::to_owned)
        .collect()
}

/// Midnight of February 29th exists only in leap years.
fn leap_year_only(normalized: &str) -> Option<&'static str> {
    normalized
        .starts_with("0 0 29 2")
        .then_some("This cron expression will only run on leap years.")
}

fn uses_intervals(normalized: &str) -> Option<&'static str> {
    normalized
        .contains("*/")
        .then_some("This cron expression uses intervals, which may lead to unexpected timings.")
}
