use std::path::Path;

use crate::config::DatasetSettings;
use crate::core::Dataset;
use crate::error::TrajectoryResult;
use crate::parsing::csv_parser;

/// Loads the case table and applies the null-filter and date contract.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a dataset from a CSV file
    pub fn load_from_csv(path: &Path, settings: &DatasetSettings) -> TrajectoryResult<Dataset> {
        let records = csv_parser::parse_records_csv(path, settings)?;
        Dataset::from_records(records, &settings.date_format)
    }

    /// Load a dataset from CSV text
    pub fn load_from_str(content: &str, settings: &DatasetSettings) -> TrajectoryResult<Dataset> {
        let records = csv_parser::parse_records_str(content, settings)?;
        Dataset::from_records(records, &settings.date_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrajectoryError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV: &str = "district,case_notification_date,cumulative_cases,cases_in_last_7_days\n\
                       A,01/04/2020,1,\n\
                       A,02/04/2020,3,2\n\
                       B,02/04/2020,5,5\n";

    #[test]
    fn test_load_from_str_filters_nulls() {
        let dataset = DatasetLoader::load_from_str(CSV, &DatasetSettings::default()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dropped_rows(), 1);
    }

    #[test]
    fn test_load_from_csv_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", CSV).unwrap();
        let dataset = DatasetLoader::load_from_csv(file.path(), &DatasetSettings::default()).unwrap();
        assert_eq!(dataset.max_weekly_cases(), 5.0);
    }

    #[test]
    fn test_bad_date_is_fatal() {
        let csv = "district,case_notification_date,cumulative_cases,cases_in_last_7_days\n\
                   A,April 1st,1,1\n";
        let err = DatasetLoader::load_from_str(csv, &DatasetSettings::default()).unwrap_err();
        assert!(matches!(err, TrajectoryError::DateParse { row: 1, .. }));
    }
}
