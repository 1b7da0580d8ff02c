mod common;

use anyhow::Result;
use common::{StandardExpenses, run_script, test_service};
use pocketbook::application::MonthlyReport;
use pocketbook::io::Exporter;
use tempfile::TempDir;

#[test]
fn test_export_csv_rows_follow_insertion_order() -> Result<()> {
    let mut service = test_service("1500")?;
    StandardExpenses::record_basic(&mut service)?;

    let mut buffer = Vec::new();
    let count = Exporter::new(&service).export_expenses_csv(&mut buffer)?;
    assert_eq!(count, 3);

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>()?;
    let summary: Vec<(&str, &str, &str)> = rows.iter().map(|r| (&r[2], &r[3], &r[4])).collect();

    assert_eq!(
        summary,
        vec![
            ("Fixed", "Rent", "1000.0"),
            ("Variable", "Food", "50.0"),
            ("Savings", "Emergency", "200.0"),
        ]
    );
    Ok(())
}

#[test]
fn test_export_json_round_trip() -> Result<()> {
    let mut service = test_service("1500")?;
    StandardExpenses::record_basic(&mut service)?;

    let mut buffer = Vec::new();
    Exporter::new(&service).export_report_json(&mut buffer)?;

    let report: MonthlyReport = serde_json::from_slice(&buffer)?;
    assert_eq!(report.expenses.len(), 3);
    assert_eq!(report.total_expenses, 1250.0);
    assert_eq!(report.remaining_budget, 250.0);
    assert_eq!(report.lines(), service.generate_report().lines());
    Ok(())
}

#[test]
fn test_session_export_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("expenses.csv");

    let script = format!(
        "budget 800\nadd Rent 500\nadd Bus 30 -k Variable\nexport csv --output \"{}\"\n",
        path.display()
    );
    let (_service, out) = run_script(&script)?;

    assert!(out.contains(&format!("Exported 2 expenses to {}", path.display())));
    let contents = std::fs::read_to_string(&path)?;
    assert_eq!(contents.lines().count(), 3);
    assert!(contents.contains(",Variable,Bus,30.0"));
    Ok(())
}

#[test]
fn test_session_export_inline_json() -> Result<()> {
    let (_service, out) = run_script("budget 100\nadd Tea 4.5 -k Variable\nexport json\n")?;

    let json_start = out.find('{').expect("json output");
    let report: MonthlyReport = serde_json::from_str(&out[json_start..])?;
    assert_eq!(report.remaining_budget, 95.5);
    Ok(())
}

#[test]
fn test_session_export_failure_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("missing").join("out.csv");

    let script = format!("export csv -o \"{}\"\nremaining\n", path.display());
    let (_service, out) = run_script(&script)?;

    assert!(out.starts_with("Export failed: Failed to create output file"));
    assert!(out.ends_with("Remaining Budget: $0.0\n"));
    Ok(())
}
