//! Schedule export to CSV and JSON
//!
//! Amounts are rounded to cents here and only here; the engine keeps full
//! precision.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::amortization::{AmortizationResult, PeriodRow};
use crate::error::Result;

/// Header row of the schedule export
pub const SCHEDULE_CSV_HEADER: [&str; 5] = ["Month", "Payment", "Principal", "Interest", "Remaining Balance"];

/// Default file name offered for the schedule download
pub const DEFAULT_SCHEDULE_FILE: &str = "updated_amortization_schedule.csv";

/// Write the schedule as CSV, one record per period
pub fn write_schedule_csv<W: Write>(writer: W, rows: &[PeriodRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(SCHEDULE_CSV_HEADER)?;

    for row in rows {
        let row = row.rounded();
        wtr.write_record([
            row.period_index.to_string(),
            format!("{:.2}", row.total_payment),
            format!("{:.2}", row.principal_component),
            format!("{:.2}", row.interest_component),
            format!("{:.2}", row.remaining_balance),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the schedule CSV to a file
pub fn write_schedule_csv_path<P: AsRef<Path>>(path: P, rows: &[PeriodRow]) -> Result<()> {
    let file = File::create(path)?;
    write_schedule_csv(file, rows)
}

/// Schedule CSV as an in-memory string
pub fn schedule_to_csv_string(rows: &[PeriodRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_schedule_csv(&mut buffer, rows)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Write the full result (schedule and summary) as pretty-printed JSON
pub fn write_result_json<W: Write>(writer: W, result: &AmortizationResult) -> Result<()> {
    serde_json::to_writer_pretty(writer, result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::compute_amortization;

    #[test]
    fn test_csv_header_and_rounding() {
        let rows = vec![PeriodRow {
            period_index: 1,
            total_payment: 4190.737329,
            principal_component: 1192.307,
            interest_component: 2998.430329,
            remaining_balance: 798807.693,
        }];

        let csv = schedule_to_csv_string(&rows).unwrap();
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Month,Payment,Principal,Interest,Remaining Balance"));
        assert_eq!(lines.next(), Some("1,4190.74,1192.31,2998.43,798807.69"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_one_record_per_period() {
        let result = compute_amortization(800_000.0, 4.54, 28, 3, 500.0).unwrap();
        let csv = schedule_to_csv_string(&result.schedule).unwrap();

        assert_eq!(csv.lines().count(), result.schedule.len() + 1);
        assert!(csv.lines().last().unwrap().ends_with(",0.00"));
    }

    #[test]
    fn test_result_json() {
        let result = compute_amortization(100_000.0, 3.0, 1, 1, 0.0).unwrap();
        let mut buffer = Vec::new();
        write_result_json(&mut buffer, &result).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schedule"].as_array().unwrap().len(), 12);
        assert_eq!(value["summary"]["new_payoff_periods"], 12);
    }
}
