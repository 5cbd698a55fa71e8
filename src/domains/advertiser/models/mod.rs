// Advertiser domain models
pub mod advertiser;

pub use advertiser::*;
