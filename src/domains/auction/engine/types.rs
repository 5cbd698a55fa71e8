// =====================================================
// 경매 엔진 타입
// Auction Engine Types
// =====================================================

use thiserror::Error;

use crate::domains::ad::models::Ad;

/// 낙찰 광고가 2위 광고 순위에 더해 지불하는 고정 증분
/// Fixed increment added on top of the second-price charge
pub const MIN_INCREMENT: f64 = 0.01;

/// 경매 결과
/// Result of one auction run (before settlement)
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionOutcome {
    /// 1위 광고 (낙찰)
    pub winner: Ad,
    /// 2위 광고 (가격 결정용)
    pub runner_up: Ad,
    /// 낙찰 광고주에게 부과할 금액
    pub charge: f64,
}

/// 경매 에러
/// Auction-specific failures; no billing happens after either
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuctionError {
    /// 후보 광고가 2개 미만
    /// Fewer than two candidate ads
    #[error("No enough ads to run an auction: {count} candidate(s), need at least 2")]
    InsufficientCandidates { count: usize },

    /// 낙찰 광고의 품질 점수가 0 (가격 계산 불가)
    /// Winner has a zero quality score, so the charge is undefined
    #[error("Degenerate auction: winning ad {ad_id} has a zero quality score")]
    DegenerateAuction { ad_id: u64 },
}
