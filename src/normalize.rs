//! Named schedule shortcuts.

/// The 7 supported named schedules and their canonical 5-field forms.
pub const NAMED_SCHEDULES: [(&str, &str); 7] = [
    ("@yearly", "0 0 1 1 *"),
    ("@annually", "0 0 1 1 *"),
    ("@monthly", "0 0 1 * *"),
    ("@weekly", "0 0 * * 0"),
    ("@daily", "0 0 * * *"),
    ("@midnight", "0 0 * * *"),
    ("@hourly", "0 * * * *"),
];

/// Substitutes a named schedule shortcut with its canonical 5-field form.
///
/// Anything that is not one of the 7 named schedules is returned unchanged,
/// even if it is not a valid expression - validation happens downstream.
pub fn normalize(raw: &str) -> String {
    NAMED_SCHEDULES
        .iter()
        .find(|(name, _)| *name == raw)
        .map(|(_, expression)| *expression)
        .unwrap_or(raw)
        .to_owned()
}
