//! 광고 서버 (Ad Server)
//!
//! 광고주와 광고를 저장하고, bid * score 순위의 일반화 2차 가격(GSP) 경매로
//! 광고를 선택한 뒤 낙찰 광고주의 예산을 차감하는 API 서버.

pub mod domains;
pub mod routes;
pub mod shared;

pub mod api_doc;
