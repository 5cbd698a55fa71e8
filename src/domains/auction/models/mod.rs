// Auction domain models
pub mod auction;

pub use auction::*;
