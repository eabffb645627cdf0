//! Load debts from CSV files or the versioned JSON plan document
//!
//! Every record goes through the strict `Debt` constructor, so anything
//! returned from here is safe to hand to the simulator.

use super::Debt;
use crate::error::LoadError;
use chrono::{DateTime, NaiveDate, Utc};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Current plan document version written by [`PlanDocument::new`]
pub const DOCUMENT_VERSION: &str = "1.0";

/// Raw CSV row
///
/// Header: `id,name,balance,interestRate,minimumPayment,startDate`
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    balance: f64,
    #[serde(rename = "interestRate")]
    interest_rate: f64,
    #[serde(rename = "minimumPayment")]
    minimum_payment: f64,
    #[serde(rename = "startDate")]
    start_date: String,
}

impl CsvRow {
    fn to_debt(self, line: usize) -> Result<Debt, LoadError> {
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d")
            .map_err(|_| LoadError::InvalidDate {
                line,
                value: self.start_date.clone(),
            })?;

        Debt::new(
            self.id,
            self.name,
            self.balance,
            self.interest_rate,
            self.minimum_payment,
            start_date,
        )
        .map_err(|source| LoadError::InvalidRecord { line, source })
    }
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, LoadError> {
    let file = File::open(path)?;
    load_debts_from_reader(file)
}

/// Load debts from any reader (e.g., string buffer, stdin)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Record numbers are 1-based and exclude the header
        debts.push(row.to_debt(idx + 1)?);
    }

    log::debug!("Loaded {} debts from CSV", debts.len());
    Ok(debts)
}

/// Derived figures stored alongside an exported plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub exported_at: Option<DateTime<Utc>>,
    pub debt_count: usize,
    pub total_balance: f64,
    pub total_minimum_payment: f64,
}

/// Exported plan: version tag, debt list, monthly budget, derived metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub version: String,
    pub debts: Vec<Debt>,
    pub monthly_budget: f64,
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
}

impl PlanDocument {
    /// Build a document at the current version with metadata filled in
    pub fn new(debts: Vec<Debt>, monthly_budget: f64, exported_at: Option<DateTime<Utc>>) -> Self {
        let metadata = DocumentMetadata {
            exported_at,
            debt_count: debts.len(),
            total_balance: debts.iter().map(|d| d.balance).sum(),
            total_minimum_payment: debts.iter().map(|d| d.minimum_payment).sum(),
        };
        Self {
            version: DOCUMENT_VERSION.to_string(),
            debts,
            monthly_budget,
            metadata: Some(metadata),
        }
    }

    /// Parse and version-check a document
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let doc: PlanDocument = serde_json::from_str(json)?;
        doc.check_version()?;
        Ok(doc)
    }

    /// Read a document from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Only major version 1 is understood
    fn check_version(&self) -> Result<(), LoadError> {
        match self.version.split('.').next() {
            Some("1") => Ok(()),
            _ => Err(LoadError::UnsupportedVersion(self.version.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DebtError;

    const CSV: &str = "\
id,name,balance,interestRate,minimumPayment,startDate
card,Store Card,450.00,24.99,35,2024-02-01
car,Car Loan,8200.50,6.9,250,2023-11-15
";

    #[test]
    fn test_load_debts_from_reader() {
        let debts = load_debts_from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].id, "card");
        assert_eq!(debts[1].name, "Car Loan");
        assert_eq!(debts[1].start_date, NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
    }

    #[test]
    fn test_bad_date_reports_record() {
        let csv = "id,name,balance,interestRate,minimumPayment,startDate\n\
                   a,Visa,100,5,10,2024-02-01\n\
                   b,Amex,100,5,10,02/01/2024\n";
        match load_debts_from_reader(csv.as_bytes()) {
            Err(LoadError::InvalidDate { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "02/01/2024");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_record_rejected() {
        let csv = "id,name,balance,interestRate,minimumPayment,startDate\n\
                   a,Visa,100,150,10,2024-02-01\n";
        match load_debts_from_reader(csv.as_bytes()) {
            Err(LoadError::InvalidRecord { line: 1, source }) => {
                assert_eq!(source, DebtError::InvalidInterestRate(150.0));
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_document_round_trip() {
        let debts = load_debts_from_reader(CSV.as_bytes()).unwrap();
        let doc = PlanDocument::new(debts.clone(), 600.0, None);
        let meta = doc.metadata.as_ref().unwrap();
        assert_eq!(meta.debt_count, 2);
        assert!((meta.total_minimum_payment - 285.0).abs() < 1e-9);

        let json = doc.to_json_pretty().unwrap();
        let back = PlanDocument::from_json(&json).unwrap();
        assert_eq!(back.debts, debts);
        assert_eq!(back.monthly_budget, 600.0);
    }

    #[test]
    fn test_document_version_check() {
        let json = r#"{"version":"2.0","debts":[],"monthlyBudget":100}"#;
        assert!(matches!(
            PlanDocument::from_json(json),
            Err(LoadError::UnsupportedVersion(v)) if v == "2.0"
        ));

        let json = r#"{"version":"1.3","debts":[],"monthlyBudget":100}"#;
        let doc = PlanDocument::from_json(json).unwrap();
        assert!(doc.metadata.is_none());
    }
}
