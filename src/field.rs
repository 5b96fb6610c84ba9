use crate::{Error, Result};
use std::fmt::Display;

/// Numeric type of all field values.
pub type FieldValueType = u8;

/// One of the 5 positions of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Minute of the hour, 0-59.
    Minute,
    /// Hour of the day, 0-23.
    Hour,
    /// Day of the month, 1-31.
    DayOfMonth,
    /// Month of the year, 1-12 or JAN-DEC.
    Month,
    /// Day of the week, 0-6 or SUN-SAT, with 7 accepted as Sunday.
    DayOfWeek,
}

impl Field {
    const DAYS_OF_WEEK: [&'static str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&'static str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    /// All fields in expression order.
    pub const ALL: [Field; 5] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
    ];

    /// Legal numeric domain of the field, inclusive.
    pub fn domain(&self) -> (FieldValueType, FieldValueType) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
        }
    }

    /// Parses a single value against the field's domain,
    /// accepting 3-letter names for months and days of week.
    fn parse_value(&self, input: &str) -> Result<FieldValueType> {
        let (min, max) = self.domain();

        if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
            let value = input
                .parse::<u32>()
                .map_err(|_| self.malformed(input))?;
            // Both 0 and 7 mean Sunday.
            if *self == Self::DayOfWeek && value == 7 {
                return Ok(0);
            }
            if value < min as u32 || value > max as u32 {
                return Err(Error::OutOfRange { field: *self, value });
            }
            return Ok(value as FieldValueType);
        }

        let (names, shift): (&[&str], FieldValueType) = match self {
            Self::Month => (&Self::MONTHS, 1),
            Self::DayOfWeek => (&Self::DAYS_OF_WEEK, 0),
            _ => (&[], 0),
        };
        names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(input))
            .map(|index| index as FieldValueType + shift)
            .ok_or_else(|| self.malformed(input))
    }

    fn malformed(&self, token: &str) -> Error {
        Error::Malformed {
            field: *self,
            token: token.to_owned(),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day-of-month",
            Self::Month => "month",
            Self::DayOfWeek => "day-of-week",
        };
        write!(f, "{name}")
    }
}

/// Parsed constraint of a single cron field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// `*` - every value of the domain.
    Any,
    /// A single value.
    Literal(FieldValueType),
    /// `a-b` - inclusive range of values.
    Range(FieldValueType, FieldValueType),
    /// `*/n`, `a/n` or `a-b/n` - every n-th value of a span.
    Step {
        /// First value of the span.
        from: FieldValueType,
        /// Last value of the span, inclusive.
        to: FieldValueType,
        /// Interval between values.
        step: FieldValueType,
    },
    /// `a,b,c` - list of literals, ranges and steps.
    List(Vec<Matcher>),
}

impl Matcher {
    /// Returns `true` if `value` satisfies the constraint.
    pub fn matches(&self, value: FieldValueType) -> bool {
        match self {
            Self::Any => true,
            Self::Literal(literal) => *literal == value,
            Self::Range(lo, hi) => (*lo..=*hi).contains(&value),
            Self::Step { from, to, step } => {
                value >= *from && value <= *to && (value - from) % step == 0
            }
            Self::List(items) => items.iter().any(|item| item.matches(value)),
        }
    }
}

/// A field position together with its parsed matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    field: Field,
    matcher: Matcher,
}

impl FieldSpec {
    /// Parses a single field token against the field's grammar.
    pub fn parse(field: Field, token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(field.malformed(token));
        }

        let items = token
            .split(',')
            .map(|item| Self::parse_item(field, item))
            .collect::<Result<Vec<_>>>()?;

        // `*` only makes sense on its own, never as a list member.
        if items.len() > 1 && items.contains(&Matcher::Any) {
            return Err(field.malformed(token));
        }

        let mut items = items;
        let matcher = if items.len() > 1 {
            Matcher::List(items)
        } else {
            items.remove(0)
        };

        Ok(Self { field, matcher })
    }

    /// Parses one comma-separated list member: `*`, literal, range or step.
    fn parse_item(field: Field, item: &str) -> Result<Matcher> {
        let (min, max) = field.domain();

        if item == "*" {
            return Ok(Matcher::Any);
        }

        if let Some((base, interval)) = item.split_once('/') {
            let step = interval
                .parse::<u32>()
                .ok()
                .filter(|step| *step >= 1 && *step <= max as u32)
                .ok_or_else(|| field.malformed(item))? as FieldValueType;

            let (from, to) = if base == "*" {
                (min, max)
            } else if let Some((lo, hi)) = base.split_once('-') {
                let lo = field.parse_value(lo)?;
                let hi = field.parse_value(hi)?;
                if lo > hi {
                    return Err(Error::InvalidRange {
                        field,
                        token: item.to_owned(),
                    });
                }
                (lo, hi)
            } else {
                (field.parse_value(base)?, max)
            };

            return Ok(Matcher::Step { from, to, step });
        }

        if let Some((lo, hi)) = item.split_once('-') {
            let lo = field.parse_value(lo)?;
            let hi = field.parse_value(hi)?;
            if lo > hi {
                return Err(Error::InvalidRange {
                    field,
                    token: item.to_owned(),
                });
            }
            return Ok(Matcher::Range(lo, hi));
        }

        Ok(Matcher::Literal(field.parse_value(item)?))
    }

    /// The field position.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The parsed matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Returns `true` if the field is unrestricted (`*`).
    pub fn is_any(&self) -> bool {
        self.matcher == Matcher::Any
    }

    /// Returns `true` if `value` satisfies the field's constraint.
    pub fn matches(&self, value: FieldValueType) -> bool {
        self.matcher.matches(value)
    }

    fn fmt_matcher(&self, matcher: &Matcher, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (min, max) = self.field.domain();
        match matcher {
            Matcher::Any => write!(f, "*"),
            Matcher::Literal(value) => write!(f, "{value}"),
            Matcher::Range(lo, hi) => write!(f, "{lo}-{hi}"),
            Matcher::Step { from, to, step } => {
                if (*from, *to) == (min, max) {
                    write!(f, "*/{step}")
                } else if *to == max {
                    write!(f, "{from}/{step}")
                } else {
                    write!(f, "{from}-{to}/{step}")
                }
            }
            Matcher::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    self.fmt_matcher(item, f)?;
                }
                Ok(())
            }
        }
    }
}

impl Display for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_matcher(&self.matcher, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::Minute)]
    #[case(Field::Hour)]
    fn parse_valid_time_fields(#[case] field: Field) {
        let test_cases = vec![
            ("*", Matcher::Any),
            ("5", Matcher::Literal(5)),
            ("05", Matcher::Literal(5)),
            ("2-5", Matcher::Range(2, 5)),
            ("3-3", Matcher::Range(3, 3)),
            ("*/5", Matcher::Step { from: field.domain().0, to: field.domain().1, step: 5 }),
            ("2/5", Matcher::Step { from: 2, to: field.domain().1, step: 5 }),
            ("2-10/3", Matcher::Step { from: 2, to: 10, step: 3 }),
            (
                "3,1",
                Matcher::List(vec![Matcher::Literal(3), Matcher::Literal(1)]),
            ),
            (
                "1,2-5,10/3",
                Matcher::List(vec![
                    Matcher::Literal(1),
                    Matcher::Range(2, 5),
                    Matcher::Step { from: 10, to: field.domain().1, step: 3 },
                ]),
            ),
        ];

        for (token, expected) in test_cases {
            let spec = FieldSpec::parse(field, token);
            assert!(spec.is_ok(), "field = {field}, token = {token}");
            assert_eq!(spec.unwrap().matcher, expected, "token = {token}");
        }
    }

    #[test]
    fn parse_valid_month_names() {
        let test_cases = vec![
            ("Jan", Matcher::Literal(1)),
            ("JUN", Matcher::Literal(6)),
            ("dec", Matcher::Literal(12)),
            ("auG-DEC", Matcher::Range(8, 12)),
            ("mar/2", Matcher::Step { from: 3, to: 12, step: 2 }),
            ("jun-sep/2", Matcher::Step { from: 6, to: 9, step: 2 }),
            (
                "feb,oct-nov",
                Matcher::List(vec![Matcher::Literal(2), Matcher::Range(10, 11)]),
            ),
        ];

        for (token, expected) in test_cases {
            let spec = FieldSpec::parse(Field::Month, token).unwrap();
            assert_eq!(spec.matcher, expected, "token = {token}");
        }
    }

    #[test]
    fn parse_valid_dow_names() {
        let test_cases = vec![
            ("Mon", Matcher::Literal(1)),
            ("WED", Matcher::Literal(3)),
            ("fri", Matcher::Literal(5)),
            ("7", Matcher::Literal(0)),
            ("Wed-sat", Matcher::Range(3, 6)),
            (
                "MON,FRI",
                Matcher::List(vec![Matcher::Literal(1), Matcher::Literal(5)]),
            ),
        ];

        for (token, expected) in test_cases {
            let spec = FieldSpec::parse(Field::DayOfWeek, token).unwrap();
            assert_eq!(spec.matcher, expected, "token = {token}");
        }
    }

    #[rstest]
    #[case(Field::Minute, vec!["", " ", ",", "1,", ",1", "1, 2", "-", "1-", "-5", "/", "*/", "5/", "a", "a-b", "1-2-3", "*,1", "5/0", "1.5", "?", "L", "5W", "1#2"])]
    #[case(Field::Hour, vec!["", "a", "*,5", "3/", "*/0", "?"])]
    #[case(Field::DayOfMonth, vec!["", "a", "L", "15W", "?", "1,*"])]
    #[case(Field::Month, vec!["", "january", "j@n", "ja", "*,2"])]
    #[case(Field::DayOfWeek, vec!["", "monday", "M@n", "we", "1#4", "5L", "?"])]
    fn parse_malformed(#[case] field: Field, #[case] tokens: Vec<&str>) {
        for token in tokens {
            let result = FieldSpec::parse(field, token);
            assert!(
                matches!(result, Err(Error::Malformed { .. })),
                "field = {field}, token = '{token}', result = {result:?}"
            );
        }
    }

    #[rstest]
    #[case(Field::Minute, "60", 60)]
    #[case(Field::Minute, "99", 99)]
    #[case(Field::Hour, "24", 24)]
    #[case(Field::DayOfMonth, "0", 0)]
    #[case(Field::DayOfMonth, "32", 32)]
    #[case(Field::Month, "0", 0)]
    #[case(Field::Month, "13", 13)]
    #[case(Field::DayOfWeek, "8", 8)]
    fn parse_out_of_range(#[case] field: Field, #[case] token: &str, #[case] value: u32) {
        assert_eq!(
            FieldSpec::parse(field, token),
            Err(Error::OutOfRange { field, value })
        );
    }

    #[rstest]
    #[case(Field::Minute, "30-10")]
    #[case(Field::Hour, "23-0")]
    #[case(Field::Month, "dec-jan")]
    #[case(Field::DayOfWeek, "5-7")] // 7 normalizes to 0 before the bounds check
    #[case(Field::Minute, "20-10/2")]
    fn parse_invalid_range(#[case] field: Field, #[case] token: &str) {
        assert!(matches!(
            FieldSpec::parse(field, token),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[rstest]
    #[case(Field::Minute, "*", "*")]
    #[case(Field::Minute, "07", "7")]
    #[case(Field::Minute, "*/15", "*/15")]
    #[case(Field::Minute, "10/5", "10/5")]
    #[case(Field::Minute, "10-30/5", "10-30/5")]
    #[case(Field::Minute, "1,2-5,10/3", "1,2-5,10/3")]
    #[case(Field::Hour, "9-17", "9-17")]
    #[case(Field::Month, "jan-mar", "1-3")]
    #[case(Field::DayOfWeek, "mon", "1")]
    #[case(Field::DayOfWeek, "7", "0")]
    fn display_reserializes_token(#[case] field: Field, #[case] token: &str, #[case] expected: &str) {
        assert_eq!(FieldSpec::parse(field, token).unwrap().to_string(), expected);
    }

    #[rstest]
    #[case("*", vec![0, 1, 33, 59], vec![])]
    #[case("5", vec![5], vec![0, 4, 6, 59])]
    #[case("10-20", vec![10, 15, 20], vec![9, 21])]
    #[case("*/15", vec![0, 15, 30, 45], vec![1, 14, 59])]
    #[case("10/15", vec![10, 25, 40, 55], vec![0, 9, 11, 59])]
    #[case("10-30/10", vec![10, 20, 30], vec![0, 40, 50])]
    #[case("1,5,30-32", vec![1, 5, 30, 31, 32], vec![0, 2, 29, 33])]
    fn matcher_matches(
        #[case] token: &str,
        #[case] matching: Vec<FieldValueType>,
        #[case] non_matching: Vec<FieldValueType>,
    ) {
        let spec = FieldSpec::parse(Field::Minute, token).unwrap();
        for value in matching {
            assert!(spec.matches(value), "token = {token}, value = {value}");
        }
        for value in non_matching {
            assert!(!spec.matches(value), "token = {token}, value = {value}");
        }
    }

    #[test]
    fn single_element_list_collapses() {
        // No trailing comma means a bare literal, not a one-element list.
        let spec = FieldSpec::parse(Field::Minute, "5").unwrap();
        assert_eq!(spec.matcher, Matcher::Literal(5));
    }
}
