// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use pocketbook::application::LedgerService;
use pocketbook::cli::Session;

/// Helper to create a service with a budget already set
pub fn test_service(budget: &str) -> Result<LedgerService> {
    let mut service = LedgerService::new();
    service.set_budget(budget)?;
    Ok(service)
}

/// Test fixture: a typical month of expenses
pub struct StandardExpenses;

impl StandardExpenses {
    /// Rent (Fixed 1000), Food (Variable 50), Emergency (Savings 200)
    pub fn record_basic(service: &mut LedgerService) -> Result<()> {
        service.add_expense("Rent", "1000", "Fixed")?;
        service.add_expense("Food", "50", "Variable")?;
        service.add_expense("Emergency", "200", "Savings")?;
        Ok(())
    }
}

/// Feed a script through a fresh session and return everything it printed
pub fn run_script(script: &str) -> Result<(LedgerService, String)> {
    let mut session = Session::new(LedgerService::new(), Vec::new());
    session.run(script.as_bytes(), false)?;
    let (service, out) = session.into_parts();
    Ok((service, String::from_utf8(out)?))
}
