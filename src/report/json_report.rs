use std::io::Write;

use crate::batch::BatchReport;
use crate::error::EmailValidatorResult;

/// Pretty-printed JSON report, newline terminated
pub fn write_json<W: Write>(report: &BatchReport, mut writer: W) -> EmailValidatorResult<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    Ok(())
}
