use chrono::{Days, NaiveDate};

use crate::error::FeeError;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Parses `value` under `pattern`, keeping the offending input in the error.
///
/// Every field must be plain digits and `%Y` exactly four of them; chrono on
/// its own takes years of any width (`1/1/24` would be year 24).
pub fn parse_date(value: &str, pattern: &'static str) -> Result<NaiveDate, FeeError> {
    if !has_strict_fields(value, pattern) {
        return Err(FeeError::Date {
            value: value.to_owned(),
            pattern,
            source: None,
        });
    }

    NaiveDate::parse_from_str(value, pattern).map_err(|source| FeeError::Date {
        value: value.to_owned(),
        pattern,
        source: Some(source),
    })
}

fn has_strict_fields(value: &str, pattern: &str) -> bool {
    let Some(separator) = pattern
        .chars()
        .find(|c| *c != '%' && !c.is_ascii_alphanumeric())
    else {
        return false;
    };

    let fields: Vec<&str> = value.split(separator).collect();
    let specs: Vec<&str> = pattern.split(separator).collect();

    fields.len() == specs.len()
        && fields.iter().zip(&specs).all(|(field, spec)| {
            !field.is_empty()
                && field.bytes().all(|b| b.is_ascii_digit())
                && (*spec != "%Y" || field.len() == 4)
        })
}

/// Checks that `count` consecutive days from `start` stay within chrono's range.
fn check_span(start: NaiveDate, count: usize) -> Result<(), FeeError> {
    if count == 0 {
        return Ok(());
    }

    start
        .checked_add_days(Days::new(count as u64 - 1))
        .map(|_| ())
        .ok_or(FeeError::DateOverflow { start, count })
}

/// Reformats `yyyy-mm-dd` strings as `dd Mon yyyy`, e.g. `2001-01-01` becomes
/// `01 Jan 2001`. Fails on the first element that does not parse.
pub fn reformat_dates<S: AsRef<str>>(dates: &[S]) -> Result<Vec<String>, FeeError> {
    dates
        .iter()
        .map(|date| {
            parse_date(date.as_ref(), ISO_DATE_FORMAT)
                .map(|parsed| parsed.format(DISPLAY_DATE_FORMAT).to_string())
        })
        .collect()
}

/// Returns `n` consecutive calendar days starting at `start` (`yyyy-mm-dd`).
/// A non-positive `n` gives an empty list.
pub fn date_range(start: &str, n: i64) -> Result<Vec<NaiveDate>, FeeError> {
    let start = parse_date(start, ISO_DATE_FORMAT)?;
    let count = usize::try_from(n).unwrap_or(0);
    check_span(start, count)?;

    Ok(start.iter_days().take(count).collect())
}

/// Pairs every value with a date, the first with `start_date` and each
/// following one a day later.
pub fn add_date_range<V, I>(values: I, start_date: &str) -> Result<Vec<(NaiveDate, V)>, FeeError>
where
    I: IntoIterator<Item = V>,
{
    let start = parse_date(start_date, ISO_DATE_FORMAT)?;
    let values: Vec<V> = values.into_iter().collect();
    check_span(start, values.len())?;

    Ok(start.iter_days().zip(values).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn reformat_single_date() {
        assert_eq!(reformat_dates(&["2024-01-15"]).unwrap(), vec!["15 Jan 2024"]);
    }

    #[test]
    fn reformat_preserves_order_and_length() {
        let input = vec![
            "2001-01-01".to_string(),
            "1999-12-31".to_string(),
            "2020-02-29".to_string(),
        ];

        let output = reformat_dates(&input).unwrap();

        assert_eq!(output, vec!["01 Jan 2001", "31 Dec 1999", "29 Feb 2020"]);
    }

    #[test]
    fn reformat_empty() {
        let input: [&str; 0] = [];
        assert!(reformat_dates(&input).unwrap().is_empty());
    }

    #[test]
    fn reformat_rejects_wrong_pattern() {
        let err = reformat_dates(&["2024-01-15", "01/15/2024"]).unwrap_err();

        match err {
            FeeError::Date { value, pattern, .. } => {
                assert_eq!(value, "01/15/2024");
                assert_eq!(pattern, ISO_DATE_FORMAT);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn reformat_rejects_two_digit_year() {
        let err = reformat_dates(&["24-01-15"]).unwrap_err();

        assert!(matches!(err, FeeError::Date { ref value, .. } if value == "24-01-15"));
    }

    #[test]
    fn parse_rejects_loose_fields() {
        for value in ["02024-01-15", " 2024-01-15", "2024-01-15 ", "2024-1-+5", "+2024-01-15"] {
            assert!(
                parse_date(value, ISO_DATE_FORMAT).is_err(),
                "accepted {value:?}"
            );
        }
    }

    #[test]
    fn parse_accepts_unpadded_month_and_day() {
        assert_eq!(parse_date("4/2/2021", "%m/%d/%Y").unwrap(), ymd(2021, 4, 2));
        assert!(parse_date("4/2/21", "%m/%d/%Y").is_err());
    }

    #[test]
    fn range_of_three_days() {
        let dates = date_range("2024-01-01", 3).unwrap();

        assert_eq!(dates, vec![ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)]);
    }

    #[test]
    fn range_crosses_month_and_leap_day() {
        let dates = date_range("2024-02-28", 3).unwrap();

        assert_eq!(dates, vec![ymd(2024, 2, 28), ymd(2024, 2, 29), ymd(2024, 3, 1)]);
    }

    #[test]
    fn range_zero_and_negative_are_empty() {
        assert!(date_range("2024-01-01", 0).unwrap().is_empty());
        assert!(date_range("2024-01-01", -5).unwrap().is_empty());
    }

    #[test]
    fn range_past_last_date_fails() {
        assert!(matches!(
            date_range("9999-12-31", i64::MAX),
            Err(FeeError::DateOverflow { .. })
        ));
    }

    #[test]
    fn range_up_to_year_ten_thousand() {
        let dates = date_range("9999-12-31", 2).unwrap();

        assert_eq!(dates, vec![ymd(9999, 12, 31), ymd(10000, 1, 1)]);
    }

    #[test]
    fn range_rejects_bad_start() {
        assert!(matches!(date_range("x", 3), Err(FeeError::Date { .. })));
    }

    #[test]
    fn add_range_pairs_values_with_days() {
        let pairs = add_date_range(vec![10, 20], "2024-03-01").unwrap();

        assert_eq!(pairs, vec![(ymd(2024, 3, 1), 10), (ymd(2024, 3, 2), 20)]);
    }

    #[test]
    fn add_range_empty_values() {
        let pairs = add_date_range(Vec::<u32>::new(), "2024-03-01").unwrap();
        assert!(pairs.is_empty());
    }
}
