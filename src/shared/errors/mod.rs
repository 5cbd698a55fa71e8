// Shared errors
pub mod api_error;
pub mod ledger_error;

pub use api_error::*;
pub use ledger_error::*;
