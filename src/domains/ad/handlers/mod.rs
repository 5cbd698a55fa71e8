// Ad handlers module
pub mod ad_handler;

pub use ad_handler::*;
