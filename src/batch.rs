//! CSV batch decisions.
//!
//! Input rows carry `personal_code,loan_amount,loan_period`; each row is run
//! through the [`DecisionEngine`] and written back with the approved pair or
//! the rejection message.

use crate::decision::{CreditRegistry, DecisionEngine};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::warn;

#[derive(Debug)]
pub enum BatchError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Io(err) => write!(f, "failed to access batch file: {}", err),
            BatchError::Csv(err) => write!(f, "invalid batch CSV data: {}", err),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io(err) => Some(err),
            BatchError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    personal_code: String,
    loan_amount: u32,
    loan_period: u32,
}

/// One evaluated application as written to the output CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRow {
    pub personal_code: String,
    pub requested_amount: u32,
    pub requested_period: u32,
    pub approved_amount: Option<u32>,
    pub approved_period: Option<u32>,
    pub error: Option<String>,
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub approved: usize,
    pub rejected: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.approved + self.rejected
    }
}

/// Decide every application in `input`, streaming results to `output`.
pub fn run_batch<R, W, C>(
    engine: &DecisionEngine<C>,
    input: R,
    output: W,
    today: NaiveDate,
) -> Result<BatchSummary, BatchError>
where
    R: Read,
    W: Write,
    C: CreditRegistry,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);
    let mut writer = csv::Writer::from_writer(output);
    let mut summary = BatchSummary::default();

    for row in reader.deserialize::<ApplicationRow>() {
        let row = row?;
        let outcome = engine.calculate_approved_loan_on(
            &row.personal_code,
            row.loan_amount,
            row.loan_period,
            today,
        );

        let record = match outcome {
            Ok(decision) => {
                summary.approved += 1;
                DecisionRow {
                    personal_code: row.personal_code,
                    requested_amount: row.loan_amount,
                    requested_period: row.loan_period,
                    approved_amount: Some(decision.loan_amount()),
                    approved_period: Some(decision.loan_period()),
                    error: None,
                }
            }
            Err(err) => {
                summary.rejected += 1;
                warn!(personal_code = %row.personal_code, error = %err, "application rejected");
                DecisionRow {
                    personal_code: row.personal_code,
                    requested_amount: row.loan_amount,
                    requested_period: row.loan_period,
                    approved_amount: None,
                    approved_period: None,
                    error: Some(err.to_string()),
                }
            }
        };
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    }

    #[test]
    fn decides_each_row_and_reports_rejections() {
        let input = "personal_code,loan_amount,loan_period\n\
                     49002010976, 4000, 12\n\
                     49002010965,4000,12\n\
                     49002010998,4000,12\n";
        let mut output = Vec::new();

        let summary = run_batch(
            &DecisionEngine::default(),
            input.as_bytes(),
            &mut output,
            today(),
        )
        .expect("batch runs");

        assert_eq!(summary, BatchSummary { approved: 2, rejected: 1 });
        assert_eq!(summary.total(), 3);

        let rendered = String::from_utf8(output).expect("utf8 output");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[0],
            "personal_code,requested_amount,requested_period,approved_amount,approved_period,error"
        );
        assert_eq!(lines[1], "49002010976,4000,12,4000,40,");
        assert!(lines[2].starts_with("49002010965,4000,12,,,"));
        assert!(lines[2].contains("existing debt"));
        assert_eq!(lines[3], "49002010998,4000,12,10000,12,");
    }

    #[test]
    fn malformed_row_aborts_the_batch() {
        let input = "personal_code,loan_amount,loan_period\n49002010976,lots,12\n";
        let result = run_batch(
            &DecisionEngine::default(),
            input.as_bytes(),
            Vec::new(),
            today(),
        );
        assert!(matches!(result, Err(BatchError::Csv(_))));
    }
}
