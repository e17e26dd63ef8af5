use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::DatasetSettings;
use crate::core::domain::RawRecord;
use crate::error::{TrajectoryError, TrajectoryResult};

/// Column positions resolved from the header row
struct ColumnIndex {
    region: usize,
    date: usize,
    cumulative: usize,
    weekly: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, settings: &DatasetSettings) -> TrajectoryResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| TrajectoryError::csv(format!("Missing column '{}'", name)))
        };

        Ok(Self {
            region: find(&settings.region_column)?,
            date: find(&settings.date_column)?,
            cumulative: find(&settings.cumulative_column)?,
            weekly: find(&settings.weekly_column)?,
        })
    }
}

/// Parse a CSV file into raw rows
pub fn parse_records_csv(csv_path: &Path, settings: &DatasetSettings) -> TrajectoryResult<Vec<RawRecord>> {
    let file = File::open(csv_path)?;
    parse_records_from_reader(file, settings)
}

/// Parse CSV text into raw rows
pub fn parse_records_str(content: &str, settings: &DatasetSettings) -> TrajectoryResult<Vec<RawRecord>> {
    parse_records_from_reader(content.as_bytes(), settings)
}

/// Parse CSV from any reader into raw rows.
///
/// Extra columns are ignored. An empty or `NaN` trailing-week cell becomes
/// `None`; any other unparsable number is an error naming the 1-based data row.
/// A row whose trailing-week value is missing never fails on its cumulative
/// cell; an unreadable one is stored as `NaN`.
pub fn parse_records_from_reader<R: Read>(
    reader: R,
    settings: &DatasetSettings,
) -> TrajectoryResult<Vec<RawRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = ColumnIndex::resolve(csv_reader.headers()?, settings)?;

    let mut records = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = result?;

        let cell = |pos: usize| record.get(pos).unwrap_or("");

        let weekly_text = cell(columns.weekly);
        let weekly_cases = if is_missing(weekly_text) {
            None
        } else {
            Some(parse_number(weekly_text).ok_or_else(|| {
                TrajectoryError::csv(format!(
                    "Invalid {} '{}' at row {}",
                    settings.weekly_column, weekly_text, row
                ))
            })?)
        };

        // rows without a weekly value are dropped later, so their other cells go unchecked
        let cumulative_text = cell(columns.cumulative);
        let cumulative_cases = match (parse_number(cumulative_text), weekly_cases) {
            (Some(v), _) => v,
            (None, None) => f64::NAN,
            (None, Some(_)) => {
                return Err(TrajectoryError::csv(format!(
                    "Invalid {} '{}' at row {}",
                    settings.cumulative_column, cumulative_text, row
                )))
            }
        };

        records.push(RawRecord {
            region: cell(columns.region).to_string(),
            date: cell(columns.date).to_string(),
            cumulative_cases,
            weekly_cases,
        });
    }

    log::info!("Parsed {} rows from CSV", records.len());
    Ok(records)
}

fn is_missing(text: &str) -> bool {
    text.is_empty() || text.eq_ignore_ascii_case("nan") || text.eq_ignore_ascii_case("null")
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
