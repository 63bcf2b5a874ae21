use std::io::Write;

use crate::batch::BatchReport;
use crate::error::EmailValidatorResult;

/// Human-readable report: one line per entry, then a summary line
pub fn write_text<W: Write>(report: &BatchReport, mut writer: W) -> EmailValidatorResult<()> {
    for entry in &report.entries {
        match &entry.message {
            None => writeln!(writer, "{:>5}  valid    {}", entry.line, entry.input)?,
            Some(message) => writeln!(
                writer,
                "{:>5}  invalid  {}  ({})",
                entry.line, entry.input, message
            )?,
        }
    }

    writeln!(
        writer,
        "{} checked, {} valid, {} invalid",
        report.total, report.valid, report.invalid
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchValidator;
    use crate::config::ValidatorConfig;
    use crate::validator::EmailValidator;

    #[test]
    fn test_text_lines() {
        let validator = EmailValidator::new(&ValidatorConfig::default()).unwrap();
        let report = BatchValidator::new(&validator).run(["user@example.com", "user@-domain.com"]);

        let mut buffer = Vec::new();
        write_text(&report, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "    1  valid    user@example.com");
        assert!(lines[1].contains("invalid  user@-domain.com"));
        assert!(lines[1].contains("starts or ends with a hyphen"));
        assert_eq!(lines[2], "2 checked, 1 valid, 1 invalid");
    }
}
