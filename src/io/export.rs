use anyhow::Result;
use std::io::Write;

use crate::application::{LedgerService, MonthlyReport};
use crate::domain::format_amount;

/// Exporter for dumping the current session to CSV or JSON
pub struct Exporter<'a> {
    service: &'a LedgerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a LedgerService) -> Self {
        Self { service }
    }

    /// Export recorded expenses to CSV format, in insertion order
    pub fn export_expenses_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "recorded_at", "kind", "name", "amount"])?;

        let mut count = 0;
        for expense in self.service.ledger().expenses() {
            csv_writer.write_record(&[
                expense.id.to_string(),
                expense.recorded_at.to_rfc3339(),
                expense.kind.as_str().to_string(),
                expense.name.clone(),
                format_amount(expense.amount),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the monthly report as pretty-printed JSON
    pub fn export_report_json<W: Write>(&self, mut writer: W) -> Result<MonthlyReport> {
        let report = self.service.generate_report();

        let json = serde_json::to_string_pretty(&report)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(report)
    }
}
