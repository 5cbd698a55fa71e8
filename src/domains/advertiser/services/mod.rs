// Advertiser services module
// 광고주 서비스 모듈

pub mod advertiser_service;
pub mod state;

pub use advertiser_service::*;
pub use state::*;
