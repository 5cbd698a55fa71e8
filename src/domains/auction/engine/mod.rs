// =====================================================
// 경매 엔진 모듈
// Auction Engine Module
// =====================================================
// 구조:
// - types: 경매 결과와 에러 타입
// - gsp: bid * score 순위 기반 일반화 2차 가격(GSP) 선택
//
// 엔진은 순수 함수만 제공하고 저장소에 접근하지 않음.
// 정산(예산 차감)은 AuctionService 가 담당.
// =====================================================

pub mod gsp;
pub mod types;

pub use gsp::select_winner;
pub use types::{AuctionError, AuctionOutcome, MIN_INCREMENT};
