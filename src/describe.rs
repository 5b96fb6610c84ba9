//! Natural-language rendering of a validated schedule.
//!
//! The sentence follows a fixed clause order: time, day of month, month,
//! day of week, with unrestricted (`*`) clauses omitted. Minute constraints
//! that cannot merge into the time clause trail the sentence ("..., every
//! 15 minutes").

use crate::{field::Matcher, schedule::Schedule};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Renders a human-readable sentence describing the schedule.
///
/// Total over any valid [`Schedule`]; every matcher variant has its own phrasing.
pub fn describe(schedule: &Schedule) -> String {
    let mut clauses: Vec<String> = Vec::new();
    let mut trailing: Option<String> = None;

    match (schedule.minute().matcher(), schedule.hour().matcher()) {
        (Matcher::Literal(minute), Matcher::Literal(hour)) => {
            clauses.push(format!("At {}", clock(*hour, *minute)));
        }
        (Matcher::Literal(minute), Matcher::Any) => {
            clauses.push(format!("At {minute} minutes past every hour"));
        }
        (Matcher::Literal(minute), hour) => {
            clauses.push(hour_lead(hour));
            if *minute != 0 {
                trailing = Some(format!("at {minute} minutes past the hour"));
            }
        }
        (Matcher::Any, Matcher::Any) => {
            clauses.push("Every minute".to_owned());
        }
        (Matcher::Any, Matcher::Literal(hour)) => {
            clauses.push(format!(
                "Every minute between {} and {}",
                clock(*hour, 0),
                clock(*hour, 59)
            ));
        }
        (Matcher::Any, hour) => {
            clauses.push(hour_lead(hour));
            trailing = Some("every minute".to_owned());
        }
        (minute, Matcher::Any) => {
            clauses.push(capitalize(&minute_phrase(minute)));
        }
        (minute, Matcher::Literal(hour)) => {
            clauses.push(format!("At {}", clock(*hour, 0)));
            trailing = Some(minute_phrase(minute));
        }
        (minute, hour) => {
            clauses.push(hour_lead(hour));
            trailing = Some(minute_phrase(minute));
        }
    }

    if !schedule.day_of_month().is_any() {
        clauses.push(dom_clause(schedule.day_of_month().matcher()));
    }
    if !schedule.month().is_any() {
        clauses.push(month_clause(schedule.month().matcher()));
    }
    if !schedule.day_of_week().is_any() {
        clauses.push(dow_clause(schedule.day_of_week().matcher()));
    }
    if let Some(trailing) = trailing {
        clauses.push(trailing);
    }

    clauses.join(", ")
}

/// 12-hour clock with AM/PM.
fn clock(hour: u8, minute: u8) -> String {
    let (hour12, period) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!("{hour12:02}:{minute:02} {period}")
}

fn capitalize(phrase: &str) -> String {
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Joins items as "a", "a and b" or "a, b and c".
fn join_and(items: &[String]) -> String {
    match items.len() {
        0 => String::new(),
        1 => items[0].clone(),
        len => format!("{} and {}", items[..len - 1].join(", "), items[len - 1]),
    }
}

/// Phrase for a non-literal, non-any minute matcher.
fn minute_phrase(matcher: &Matcher) -> String {
    match matcher {
        Matcher::Step { from: 0, to: 59, step } => format!("every {step} minutes"),
        Matcher::Step { from, to: 59, step } => {
            format!("every {step} minutes starting at minute {from}")
        }
        Matcher::Step { from, to, step } => {
            format!("every {step} minutes from minute {from} through {to}")
        }
        Matcher::Range(lo, hi) => format!("every minute from {lo} through {hi} past the hour"),
        Matcher::List(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Matcher::Literal(value) => value.to_string(),
                    Matcher::Range(lo, hi) => format!("{lo} through {hi}"),
                    Matcher::Step { from, to, step } => {
                        format!("every {step} from {from} through {to}")
                    }
                    _ => String::new(),
                })
                .collect();
            format!("at minute {}", join_and(&items))
        }
        Matcher::Literal(value) => format!("at minute {value}"),
        Matcher::Any => "every minute".to_owned(),
    }
}

/// Leading clause for a non-literal, non-any hour matcher.
fn hour_lead(matcher: &Matcher) -> String {
    match matcher {
        Matcher::Range(lo, hi) => {
            format!("At every hour from {} through {}", clock(*lo, 0), clock(*hi, 0))
        }
        Matcher::Step { from: 0, to: 23, step } => format!("Every {step} hours"),
        Matcher::Step { from, to: 23, step } => {
            format!("Every {step} hours starting at {}", clock(*from, 0))
        }
        Matcher::Step { from, to, step } => format!(
            "Every {step} hours from {} through {}",
            clock(*from, 0),
            clock(*to, 0)
        ),
        Matcher::List(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Matcher::Literal(hour) => clock(*hour, 0),
                    Matcher::Range(lo, hi) => {
                        format!("{} through {}", clock(*lo, 0), clock(*hi, 0))
                    }
                    Matcher::Step { step, .. } => format!("every {step} hours"),
                    _ => String::new(),
                })
                .collect();
            format!("At {}", join_and(&items))
        }
        Matcher::Literal(hour) => format!("At {}", clock(*hour, 0)),
        Matcher::Any => "Every hour".to_owned(),
    }
}

fn dom_clause(matcher: &Matcher) -> String {
    match matcher {
        Matcher::Literal(day) => format!("on day {day} of the month"),
        Matcher::Range(lo, hi) => format!("on every day from {lo} through {hi} of the month"),
        Matcher::Step { from: 1, to: 31, step } => format!("on every {step} days of the month"),
        Matcher::Step { from, to: 31, step } => {
            format!("on every {step} days of the month starting on day {from}")
        }
        Matcher::Step { from, to, step } => {
            format!("on every {step} days of the month from day {from} through {to}")
        }
        Matcher::List(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Matcher::Literal(day) => day.to_string(),
                    Matcher::Range(lo, hi) => format!("{lo} through {hi}"),
                    Matcher::Step { from, to, step } => {
                        format!("every {step} from {from} through {to}")
                    }
                    _ => String::new(),
                })
                .collect();
            format!("on day {} of the month", join_and(&items))
        }
        Matcher::Any => String::new(),
    }
}

fn month_clause(matcher: &Matcher) -> String {
    let name = |month: &u8| MONTH_NAMES[(month - 1) as usize].to_owned();
    match matcher {
        Matcher::Literal(month) => format!("only in {}", name(month)),
        Matcher::Range(lo, hi) => format!("{} through {}", name(lo), name(hi)),
        Matcher::Step { from: 1, to: 12, step } => format!("every {step} months"),
        Matcher::Step { from, to: 12, step } => {
            format!("every {step} months starting in {}", name(from))
        }
        Matcher::Step { from, to, step } => {
            format!("every {step} months, {} through {}", name(from), name(to))
        }
        Matcher::List(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Matcher::Literal(month) => name(month),
                    Matcher::Range(lo, hi) => format!("{} through {}", name(lo), name(hi)),
                    Matcher::Step { step, .. } => format!("every {step} months"),
                    _ => String::new(),
                })
                .collect();
            format!("only in {}", join_and(&items))
        }
        Matcher::Any => String::new(),
    }
}

fn dow_clause(matcher: &Matcher) -> String {
    let name = |dow: &u8| WEEKDAY_NAMES[*dow as usize].to_owned();
    match matcher {
        Matcher::Literal(dow) => format!("only on {}", name(dow)),
        Matcher::Range(lo, hi) => format!("{} through {}", name(lo), name(hi)),
        Matcher::Step { from: 0, to: 6, step } => format!("every {step} days of the week"),
        Matcher::Step { from, to, step } => format!(
            "every {step} days of the week, {} through {}",
            name(from),
            name(to)
        ),
        Matcher::List(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Matcher::Literal(dow) => name(dow),
                    Matcher::Range(lo, hi) => format!("{} through {}", name(lo), name(hi)),
                    Matcher::Step { step, .. } => format!("every {step} days of the week"),
                    _ => String::new(),
                })
                .collect();
            format!("on {}", join_and(&items))
        }
        Matcher::Any => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, "12:00 AM")]
    #[case(0, 5, "12:05 AM")]
    #[case(9, 30, "09:30 AM")]
    #[case(11, 59, "11:59 AM")]
    #[case(12, 0, "12:00 PM")]
    #[case(14, 5, "02:05 PM")]
    #[case(23, 0, "11:00 PM")]
    fn twelve_hour_clock(#[case] hour: u8, #[case] minute: u8, #[case] expected: &str) {
        assert_eq!(clock(hour, minute), expected);
    }

    #[test]
    fn join_and_shapes() {
        assert_eq!(join_and(&["1".to_owned()]), "1");
        assert_eq!(join_and(&["1".to_owned(), "15".to_owned()]), "1 and 15");
        assert_eq!(
            join_and(&["1".to_owned(), "5".to_owned(), "15".to_owned()]),
            "1, 5 and 15"
        );
    }

    #[rstest]
    #[case("* * * * *", "Every minute")]
    #[case("30 14 * * *", "At 02:30 PM")]
    #[case("0 0 * * 0", "At 12:00 AM, only on Sunday")]
    #[case("@weekly", "At 12:00 AM, only on Sunday")]
    #[case(
        "*/15 14 1,15 * 2-5",
        "At 02:00 PM, on day 1 and 15 of the month, Tuesday through Friday, every 15 minutes"
    )]
    #[case("5 * * * *", "At 5 minutes past every hour")]
    #[case("*/10 * * * *", "Every 10 minutes")]
    #[case("* 14 * * *", "Every minute between 02:00 PM and 02:59 PM")]
    #[case("0 12 * * MON-FRI", "At 12:00 PM, Monday through Friday")]
    #[case("0 9-17 * * *", "At every hour from 09:00 AM through 05:00 PM")]
    #[case("30 */6 * * *", "Every 6 hours, at 30 minutes past the hour")]
    #[case("0 0 1 1 *", "At 12:00 AM, on day 1 of the month, only in January")]
    #[case("0 0 29 2 *", "At 12:00 AM, on day 29 of the month, only in February")]
    #[case("0 0 1-7 * 1", "At 12:00 AM, on every day from 1 through 7 of the month, only on Monday")]
    #[case("0 0 * */3 0,6", "At 12:00 AM, every 3 months, on Sunday and Saturday")]
    #[case("10-20 3 * * *", "At 03:00 AM, every minute from 10 through 20 past the hour")]
    #[case("0 8,12,18 * * *", "At 08:00 AM, 12:00 PM and 06:00 PM")]
    #[case("* */2 * * *", "Every 2 hours, every minute")]
    #[case("0 0 */5 * *", "At 12:00 AM, on every 5 days of the month")]
    #[case("0 0 * jun-aug *", "At 12:00 AM, June through August")]
    fn describes(#[case] expression: &str, #[case] expected: &str) {
        let schedule = Schedule::new(expression).unwrap();
        assert_eq!(describe(&schedule), expected, "expression = {expression}");
    }
}
