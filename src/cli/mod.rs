use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, IsTerminal, stdin, stdout};
use std::path::PathBuf;

use crate::application::{LedgerService, remaining_budget_line};

mod session;

pub use session::*;

/// Pocketbook - Monthly Budget Tracker
#[derive(Parser)]
#[command(name = "pocketbook")]
#[command(about = "Set a monthly budget, record expenses and see what is left")]
#[command(version)]
pub struct Cli {
    /// Monthly budget to start the session with (e.g., "1000")
    #[arg(short, long, allow_hyphen_values = true)]
    pub budget: Option<String>,

    /// Read intents from a file instead of standard input
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        crate::logging::init(self.verbose);

        let mut service = LedgerService::new();
        if let Some(budget) = &self.budget {
            let remaining = service
                .set_budget(budget)
                .with_context(|| format!("Invalid --budget value '{}'", budget))?;
            println!("{}", remaining_budget_line(remaining));
        }

        let mut session = Session::new(service, stdout().lock());

        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path.display()))?;
                session.run(BufReader::new(file), false)?;
            }
            None => {
                let interactive = stdin().is_terminal();
                if interactive {
                    println!("Pocketbook - type 'help' for commands, 'quit' to exit");
                }
                session.run(stdin().lock(), interactive)?;
            }
        }

        Ok(())
    }
}
