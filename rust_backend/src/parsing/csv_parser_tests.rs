#[cfg(test)]
mod tests {
    use crate::config::DatasetSettings;
    use crate::error::TrajectoryError;
    use crate::parsing::csv_parser::{parse_records_csv, parse_records_str};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "district,case_notification_date,cumulative_cases,cases_in_last_7_days";

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    /// Test parsing CSV with all required columns
    #[test]
    fn test_parse_records_basic() {
        let csv_content = format!("{}\nKathmandu,05/04/2020,12,9.0\nLalitpur,05/04/2020,3,3\n", HEADER);

        let temp_file = create_temp_csv(&csv_content);
        let rows = parse_records_csv(temp_file.path(), &DatasetSettings::default()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].region, "Kathmandu");
        assert_eq!(rows[0].date, "05/04/2020");
        assert_eq!(rows[0].cumulative_cases, 12.0);
        assert_eq!(rows[0].weekly_cases, Some(9.0));
    }

    /// Empty and NaN trailing-week cells are missing values, not errors
    #[test]
    fn test_missing_weekly_cells() {
        let csv_content = format!("{}\nA,01/04/2020,1,\nA,02/04/2020,2,NaN\nA,03/04/2020,4,2\n", HEADER);

        let rows = parse_records_str(&csv_content, &DatasetSettings::default()).unwrap();
        assert_eq!(rows[0].weekly_cases, None);
        assert_eq!(rows[1].weekly_cases, None);
        assert_eq!(rows[2].weekly_cases, Some(2.0));
    }

    /// Extra and reordered columns are fine
    #[test]
    fn test_extra_columns_and_order() {
        let csv_content = "cases_in_last_7_days,state,district,cumulative_cases,case_notification_date\n7,Bagmati,Bhaktapur,20,06/04/2020\n";

        let rows = parse_records_str(csv_content, &DatasetSettings::default()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].region, "Bhaktapur");
        assert_eq!(rows[0].date, "06/04/2020");
        assert_eq!(rows[0].cumulative_cases, 20.0);
        assert_eq!(rows[0].weekly_cases, Some(7.0));
    }

    /// Missing column is reported by name
    #[test]
    fn test_missing_column() {
        let csv_content = "district,case_notification_date,cumulative_cases\nA,01/04/2020,1\n";

        let err = parse_records_str(csv_content, &DatasetSettings::default()).unwrap_err();
        assert!(matches!(err, TrajectoryError::Csv { .. }));
        assert!(err.to_string().contains("cases_in_last_7_days"));
    }

    /// Bad numbers name the row
    #[test]
    fn test_invalid_cumulative_number() {
        let csv_content = format!("{}\nA,01/04/2020,1,1\nA,02/04/2020,lots,1\n", HEADER);

        let err = parse_records_str(&csv_content, &DatasetSettings::default()).unwrap_err();
        assert!(err.to_string().contains("row 2"), "unexpected: {}", err);
    }

    /// A row with no weekly value is kept for dropping even if its cumulative cell is blank
    #[test]
    fn test_blank_cumulative_on_row_without_weekly() {
        let csv_content = format!("{}\nA,01/04/2020,,\nA,02/04/2020,NaN,null\nA,03/04/2020,3,2\n", HEADER);

        let rows = parse_records_str(&csv_content, &DatasetSettings::default()).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].cumulative_cases.is_nan());
        assert_eq!(rows[0].weekly_cases, None);
        assert!(rows[1].cumulative_cases.is_nan());
        assert_eq!(rows[2].cumulative_cases, 3.0);
    }

    /// A blank cumulative cell is still an error when the row has a weekly value
    #[test]
    fn test_blank_cumulative_with_weekly_is_error() {
        let csv_content = format!("{}\nA,01/04/2020,,4\n", HEADER);

        let err = parse_records_str(&csv_content, &DatasetSettings::default()).unwrap_err();
        assert!(err.to_string().contains("cumulative_cases"), "unexpected: {}", err);
        assert!(err.to_string().contains("row 1"), "unexpected: {}", err);
    }

    /// Custom column names from configuration
    #[test]
    fn test_custom_column_names() {
        let settings = DatasetSettings {
            region_column: "county".to_string(),
            date_column: "day".to_string(),
            cumulative_column: "total".to_string(),
            weekly_column: "week".to_string(),
            ..DatasetSettings::default()
        };
        let csv_content = "county,day,total,week\nCork,01/04/2020,5,2\n";

        let rows = parse_records_str(csv_content, &settings).unwrap();
        assert_eq!(rows[0].region, "Cork");
    }

    /// Header only
    #[test]
    fn test_header_only() {
        let rows = parse_records_str(&format!("{}\n", HEADER), &DatasetSettings::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = parse_records_csv(std::path::Path::new("/nonexistent/cases.csv"), &DatasetSettings::default())
            .unwrap_err();
        assert!(matches!(err, TrajectoryError::Io(_)));
    }
}
