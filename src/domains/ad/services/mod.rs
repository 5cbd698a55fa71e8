// Ad services module
pub mod ad_service;
pub mod state;

pub use ad_service::*;
pub use state::*;
