use csv::WriterBuilder;
use std::io::Write;

use crate::batch::BatchReport;
use crate::error::EmailValidatorResult;

const HEADERS: [&str; 5] = ["line", "input", "valid", "reason", "message"];

/// Write one row per entry; summary totals are not part of the CSV
pub fn write_csv<W: Write>(report: &BatchReport, writer: W) -> EmailValidatorResult<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    writer.write_record(HEADERS)?;

    for entry in &report.entries {
        writer.write_record([
            entry.line.to_string(),
            entry.input.clone(),
            entry.valid.to_string(),
            entry.reason.clone().unwrap_or_default(),
            entry.message.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchValidator;
    use crate::config::ValidatorConfig;
    use crate::validator::EmailValidator;

    #[test]
    fn test_csv_rows() {
        let validator = EmailValidator::new(&ValidatorConfig::default()).unwrap();
        let report = BatchValidator::new(&validator).run(["user@example.com", "a,b@example.com"]);

        let mut buffer = Vec::new();
        write_csv(&report, &mut buffer).unwrap();

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADERS.to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][2], "true");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[1][1], "a,b@example.com");
        assert_eq!(&rows[1][3], "pattern_mismatch");
    }

    #[test]
    fn test_empty_report_has_headers() {
        let validator = EmailValidator::new(&ValidatorConfig::default()).unwrap();
        let report = BatchValidator::new(&validator).run(Vec::<&str>::new());

        let mut buffer = Vec::new();
        write_csv(&report, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "line,input,valid,reason,message\n");
    }
}
