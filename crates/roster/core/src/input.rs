//! Raw form input and the coercion rules that turn it into domain values.
//!
//! Text fields are validated for presence only. Numeric fields are never
//! rejected: anything that does not start with a number becomes zero, matching
//! the lenient behaviour users of the original tracker relied on.

use chrono::NaiveDate;

use crate::error::{InputError, InputField};

/// Date format accepted for match dates (what a date picker produces).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validated fields for creating a player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPlayer {
    pub name: String,
    pub role: String,
    pub country: String,
}

impl NewPlayer {
    /// Trim and validate the three required player fields.
    pub fn new(
        name: impl AsRef<str>,
        role: impl AsRef<str>,
        country: impl AsRef<str>,
    ) -> Result<Self, InputError> {
        Ok(Self {
            name: required(name.as_ref(), InputField::Name)?,
            role: required(role.as_ref(), InputField::Role)?,
            country: required(country.as_ref(), InputField::Country)?,
        })
    }
}

/// Raw text of a match record form.
///
/// Numeric fields stay as text until the record is built so that coercion
/// happens in exactly one place ([`parse_count`] / [`parse_overs`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordInput {
    pub opponent: String,
    pub runs: String,
    pub balls: String,
    pub wickets: String,
    pub overs: String,
    pub date: String,
}

impl RecordInput {
    /// Check the fields a user must fill in. Numeric fields are not checked.
    pub fn validate(&self) -> Result<(), InputError> {
        required(&self.opponent, InputField::Opponent)?;

        let date = self.date.trim();
        if date.is_empty() {
            return Err(InputError::MissingField(InputField::Date));
        }
        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| InputError::InvalidDate(date.to_owned()))?;

        Ok(())
    }
}

fn required(value: &str, field: InputField) -> Result<String, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

/// Parse a non-negative count using integer-prefix semantics.
///
/// Leading whitespace and an optional sign are skipped, then the longest run of
/// ASCII digits is taken (`"45abc"` → 45). Text without leading digits yields 0,
/// negative values clamp to 0 and values beyond `u32::MAX` saturate.
pub fn parse_count(raw: &str) -> u32 {
    let (negative, rest) = split_sign(raw.trim_start());
    let digits = leading_digits(rest);
    if digits.is_empty() || negative {
        return 0;
    }

    digits.bytes().fold(0u32, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(u32::from(digit - b'0'))
    })
}

/// Parse a non-negative decimal using float-prefix semantics.
///
/// Accepts `[sign]digits[.digits]` at the start of the text (`".5"` and `"3."`
/// are valid). Anything unparsable, negative or non-finite yields 0.0.
pub fn parse_overs(raw: &str) -> f64 {
    let (negative, rest) = split_sign(raw.trim_start());
    let whole = leading_digits(rest);
    let fraction = rest[whole.len()..]
        .strip_prefix('.')
        .map(leading_digits)
        .unwrap_or("");

    if whole.is_empty() && fraction.is_empty() {
        return 0.0;
    }

    let literal = format!(
        "{}.{}",
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction }
    );

    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() && !negative => value,
        _ => 0.0,
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_take_leading_digits() {
        assert_eq!(parse_count("45"), 45);
        assert_eq!(parse_count("  12 runs"), 12);
        assert_eq!(parse_count("7.9"), 7);
        assert_eq!(parse_count("+3"), 3);
    }

    #[test]
    fn unparsable_or_negative_counts_become_zero() {
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("-5"), 0);
        assert_eq!(parse_count("- 5"), 0);
    }

    #[test]
    fn huge_counts_saturate() {
        assert_eq!(parse_count("99999999999999"), u32::MAX);
    }

    #[test]
    fn overs_take_decimal_prefix() {
        assert_eq!(parse_overs("3.4"), 3.4);
        assert_eq!(parse_overs("10"), 10.0);
        assert_eq!(parse_overs(".5"), 0.5);
        assert_eq!(parse_overs("4."), 4.0);
        assert_eq!(parse_overs("2.5 overs"), 2.5);
    }

    #[test]
    fn unparsable_or_negative_overs_become_zero() {
        assert_eq!(parse_overs("abc"), 0.0);
        assert_eq!(parse_overs("."), 0.0);
        assert_eq!(parse_overs("-1.5"), 0.0);
    }

    #[test]
    fn new_player_trims_and_requires_fields() {
        let player = NewPlayer::new(" Test ", "Batsman", "India").unwrap();
        assert_eq!(player.name, "Test");

        assert_eq!(
            NewPlayer::new("Test", "   ", "India"),
            Err(InputError::MissingField(InputField::Role))
        );
    }

    #[test]
    fn record_validation_checks_opponent_and_date() {
        let mut input = RecordInput {
            opponent: "X".into(),
            runs: "abc".into(),
            date: "2024-01-01".into(),
            ..RecordInput::default()
        };
        assert_eq!(input.validate(), Ok(()));

        input.date = "01/02/2024".into();
        assert_eq!(
            input.validate(),
            Err(InputError::InvalidDate("01/02/2024".into()))
        );

        input.opponent.clear();
        assert_eq!(
            input.validate(),
            Err(InputError::MissingField(InputField::Opponent))
        );
    }
}
