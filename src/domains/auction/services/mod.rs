// Auction services module
// 경매 서비스 모듈

pub mod auction_service;
pub mod state;

pub use auction_service::*;
pub use state::*;
