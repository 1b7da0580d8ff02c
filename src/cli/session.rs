use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::application::{AppError, LedgerService, remaining_budget_line};
use crate::io::Exporter;

/// One line of user input, parsed as an intent.
#[derive(Parser, Debug)]
#[command(name = "pocketbook", no_binary_name = true)]
#[command(disable_version_flag = true)]
struct IntentLine {
    #[command(subcommand)]
    intent: Intent,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Intent {
    /// Set the monthly budget (replaces any previous value)
    Budget {
        /// Budget amount (e.g., "1000" or "1000.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Record an expense
    Add {
        /// Expense name (quote it if it contains spaces)
        name: String,

        /// Amount spent (e.g., "50" or "12.99")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Kind: Fixed, Variable, Savings (anything else is recorded as Savings)
        #[arg(short, long, default_value = "Fixed")]
        kind: String,
    },

    /// Print the monthly report with every expense recorded so far
    Report,

    /// Show the remaining budget
    Remaining,

    /// Export expenses (csv) or the report (json)
    Export {
        format: ExportFormat,

        /// Output file (printed inline if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse a raw input line into an intent.
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_intent(line: &str) -> Result<Option<Intent>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(line).map_err(|e| format!("error: {}", e))?;
    IntentLine::try_parse_from(words)
        .map(|parsed| Some(parsed.intent))
        .map_err(|e| e.render().to_string().trim_end().to_string())
}

/// Terminal presentation surface: reads intents line by line, forwards them
/// to the ledger service and writes the outcome to `out`.
pub struct Session<W: Write> {
    service: LedgerService,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(service: LedgerService, out: W) -> Self {
        Self { service, out }
    }

    pub fn service(&self) -> &LedgerService {
        &self.service
    }

    pub fn into_parts(self) -> (LedgerService, W) {
        (self.service, self.out)
    }

    /// Process every line of `input` until it is exhausted or the user quits.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        tracing::debug!(expenses = self.service.ledger().len(), "session ended");
        Ok(())
    }

    /// Handle one raw input line. Only failures writing to the output are
    /// returned as errors; everything else is reported to the user.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match parse_intent(line) {
            Ok(Some(intent)) => self.handle(intent),
            Ok(None) => Ok(Flow::Continue),
            Err(message) => {
                writeln!(self.out, "{}", message)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn handle(&mut self, intent: Intent) -> Result<Flow> {
        tracing::trace!(?intent, "handling intent");

        match intent {
            Intent::Budget { amount } => match self.service.set_budget(&amount) {
                Ok(remaining) => writeln!(self.out, "{}", remaining_budget_line(remaining))?,
                Err(AppError::InvalidAmount(_)) => {
                    writeln!(self.out, "Please enter a valid budget amount.")?
                }
            },

            Intent::Add { name, amount, kind } => {
                match self.service.add_expense(&name, &amount, &kind) {
                    Ok(recorded) => {
                        writeln!(self.out, "{}", recorded.description)?;
                        writeln!(
                            self.out,
                            "{}",
                            remaining_budget_line(recorded.remaining_budget)
                        )?;
                    }
                    Err(AppError::InvalidAmount(_)) => writeln!(self.out, "Enter a valid amount.")?,
                }
            }

            Intent::Report => {
                let report = self.service.generate_report();
                writeln!(self.out)?;
                writeln!(self.out, "{}", report)?;
                writeln!(
                    self.out,
                    "{}",
                    remaining_budget_line(report.remaining_budget)
                )?;
            }

            Intent::Remaining => {
                writeln!(
                    self.out,
                    "{}",
                    remaining_budget_line(self.service.remaining_budget())
                )?;
            }

            Intent::Export { format, output } => {
                if let Err(e) = self.export(format, output.as_deref()) {
                    tracing::warn!(error = %e, "export failed");
                    writeln!(self.out, "Export failed: {:#}", e)?;
                }
            }

            Intent::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn export(&mut self, format: ExportFormat, output: Option<&std::path::Path>) -> Result<()> {
        use std::fs::File;

        let exporter = Exporter::new(&self.service);

        match output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                match format {
                    ExportFormat::Csv => {
                        let count = exporter.export_expenses_csv(file)?;
                        writeln!(
                            self.out,
                            "Exported {} expenses to {}",
                            count,
                            path.display()
                        )?;
                    }
                    ExportFormat::Json => {
                        let report = exporter.export_report_json(file)?;
                        writeln!(
                            self.out,
                            "Exported report with {} expenses to {}",
                            report.expenses.len(),
                            path.display()
                        )?;
                    }
                }
            }
            None => match format {
                ExportFormat::Csv => {
                    exporter.export_expenses_csv(&mut self.out)?;
                }
                ExportFormat::Json => {
                    exporter.export_report_json(&mut self.out)?;
                }
            },
        }

        Ok(())
    }
}
