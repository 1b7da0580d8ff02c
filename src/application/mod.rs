// Application layer - intent handling over the in-memory ledger.
// Any presentation surface goes through LedgerService.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
