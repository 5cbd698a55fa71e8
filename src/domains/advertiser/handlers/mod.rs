// Advertiser handlers module
pub mod advertiser_handler;

pub use advertiser_handler::*;
