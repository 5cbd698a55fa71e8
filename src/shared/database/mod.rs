// Database module
pub mod connection;
pub mod ledger;
pub mod memory;
pub mod pg_store;
pub mod repositories;

pub use connection::*;
pub use ledger::*;
pub use memory::*;
pub use pg_store::*;
pub use repositories::*;
