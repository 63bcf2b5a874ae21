use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub mod csv_report;
pub mod json_report;
pub mod text_report;

use crate::batch::BatchReport;
use crate::error::{EmailValidatorError, EmailValidatorResult};

/// Report format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[serde(alias = "txt")]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for ReportFormat {
    type Err = EmailValidatorError;

    fn from_str(s: &str) -> EmailValidatorResult<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(EmailValidatorError::UnsupportedFormat { format: s.to_string() }),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Write a report to any writer
pub fn write_report<W: Write>(
    report: &BatchReport,
    format: ReportFormat,
    writer: W,
) -> EmailValidatorResult<()> {
    debug!("Writing {} entries as {}", report.entries.len(), format);

    match format {
        ReportFormat::Text => text_report::write_text(report, writer),
        ReportFormat::Json => json_report::write_json(report, writer),
        ReportFormat::Csv => csv_report::write_csv(report, writer),
    }
}

/// Write a report to a file, returning the number of bytes written
pub async fn export_report<P: AsRef<Path>>(
    report: &BatchReport,
    format: ReportFormat,
    output_path: P,
) -> EmailValidatorResult<u64> {
    let output_path = output_path.as_ref();

    let mut buffer = Vec::new();
    write_report(report, format, &mut buffer)?;
    tokio::fs::write(output_path, &buffer).await?;

    let file_size = tokio::fs::metadata(output_path).await?.len();
    info!(
        "{} report written: {} entries, {} bytes, {}",
        format,
        report.entries.len(),
        file_size,
        output_path.display()
    );

    Ok(file_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchValidator;
    use crate::config::ValidatorConfig;
    use crate::validator::EmailValidator;
    use tempfile::tempdir;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("txt".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::Csv.to_string(), "csv");
        assert!("xlsx".parse::<ReportFormat>().is_err());
    }

    #[tokio::test]
    async fn test_export_report_to_file() {
        let validator = EmailValidator::new(&ValidatorConfig::default()).unwrap();
        let report = BatchValidator::new(&validator).run(["user@example.com", "nope"]);

        let dir = tempdir().unwrap();
        let path = dir.path().join("report.json");
        let size = export_report(&report, ReportFormat::Json, &path).await.unwrap();

        assert!(size > 0);
        let content = tokio::fs::read_to_string(&path).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["invalid"], 1);
    }
}
