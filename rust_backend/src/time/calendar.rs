use chrono::NaiveDate;

/// Parse a calendar date with a chrono format string.
///
/// Surrounding whitespace is ignored. Returns `None` for anything chrono
/// rejects, including impossible dates such as `31/02/2020`.
///
/// # Example
/// ```
/// use trajectory_backend::time::parse_date;
/// let date = parse_date("05/04/2020", "%d/%m/%Y").unwrap();
/// assert_eq!(date.to_string(), "2020-04-05");
/// ```
pub fn parse_date(text: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), format).ok()
}

/// Render a date as the label used for frame names, slider steps and hover text.
pub fn format_date_label(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%d/%m/%Y";

    #[test]
    fn test_parse_day_month_year() {
        let date = parse_date("23/03/2020", FORMAT).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 23).unwrap());
    }

    #[test]
    fn test_parse_unpadded_and_padded_agree() {
        assert_eq!(parse_date("5/4/2020", FORMAT), parse_date("05/04/2020", FORMAT));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("2020-04-05", FORMAT).is_none());
        assert!(parse_date("31/02/2020", FORMAT).is_none());
        assert!(parse_date("", FORMAT).is_none());
    }

    #[test]
    fn test_label_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2020, 4, 5).unwrap();
        assert_eq!(format_date_label(date, FORMAT), "05/04/2020");
    }

    #[test]
    fn test_label_round_trip() {
        let label = "17/08/2020";
        let date = parse_date(label, FORMAT).unwrap();
        assert_eq!(format_date_label(date, FORMAT), label);
    }
}
