// Auction handlers module
pub mod auction_handler;

pub use auction_handler::*;
