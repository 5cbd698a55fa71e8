// =====================================================
// LedgerStore Trait (저장소 인터페이스)
// =====================================================
// 광고주/광고를 저장하는 저장소의 공개 인터페이스.
// Service 계층은 이 trait만 사용 (Arc<dyn LedgerStore>).
//
// 구현체:
// - PgLedgerStore: PostgreSQL (sqlx 커넥션 풀)
// - MemoryLedgerStore: 메모리 기반 (테스트, 로컬 실행)
//
// 예산 변경 규칙:
// - adjust_budget 은 읽기-계산-쓰기를 하나의 원자적 단위로 수행해야 함
//   (동시에 두 경매가 같은 광고주를 차감해도 업데이트 유실 없음)
// - adjust_budget 의 시간 제한은 구현체 안에서, 커밋 전에만 적용됨
// =====================================================

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::domains::ad::models::{Ad, NewAd};
use crate::domains::advertiser::models::Advertiser;
use crate::shared::errors::LedgerError;

/// 광고 원장 저장소 인터페이스
/// Ledger Store interface
#[async_trait]
pub trait LedgerStore: Send + Sync {
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 광고 (Ads)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 모든 광고 조회 (ID 오름차순, 경매 스캔 순서)
    /// List every ad in insertion order
    async fn list_all_ads(&self) -> Result<Vec<Ad>, LedgerError>;

    /// 광고 추가
    /// Insert an ad; fails with `AdvertiserNotFound` if the owner does not exist
    async fn insert_ad(&self, ad: NewAd) -> Result<u64, LedgerError>;

    /// 광고 삭제 (삭제된 행이 있으면 true)
    /// Delete an ad by id
    async fn delete_ad(&self, ad_id: u64) -> Result<bool, LedgerError>;

    /// 광고주 ID로 광고 목록 조회
    async fn find_ads_by_advertiser(&self, advertiser_id: u64) -> Result<Vec<Ad>, LedgerError>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 광고주 (Advertisers)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    /// 광고주 추가 (이름 중복 시 DuplicateName)
    /// Insert an advertiser
    async fn insert_advertiser(&self, name: &str, budget: f64) -> Result<u64, LedgerError>;

    /// 이름으로 광고주 존재 여부 확인
    ///
    /// "없음"은 Ok(false), 조회 실패는 Err 로 구분함
    async fn advertiser_exists(&self, name: &str) -> Result<bool, LedgerError>;

    /// 이름으로 광고주 조회
    async fn find_advertiser_by_name(&self, name: &str) -> Result<Advertiser, LedgerError>;

    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
    // 예산 (Budget)
    // ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    async fn get_budget(&self, advertiser_id: u64) -> Result<f64, LedgerError>;

    async fn set_budget(&self, advertiser_id: u64, budget: f64) -> Result<(), LedgerError>;

    /// 예산 원자적 증감 (delta 음수면 차감, 양수면 충전)
    /// Atomically apply `budget += delta` and return the new budget
    ///
    /// 구현체가 자체적으로 시간을 제한함: 시간 초과 시 예산은 그대로이고 Timeout,
    /// 변경이 적용되었으면 반드시 Ok. 호출자는 `within_deadline` 으로 감싸지 않음
    /// (적용 후 취소되면 과금과 응답이 어긋남)
    async fn adjust_budget(&self, advertiser_id: u64, delta: f64) -> Result<f64, LedgerError>;
}

/// 스토어 호출에 타임아웃 적용
/// Bound a store call; an expired deadline becomes `LedgerError::Timeout`
pub async fn within_deadline<T, F>(limit: Duration, call: F) -> Result<T, LedgerError>
where
    F: Future<Output = Result<T, LedgerError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(LedgerError::Timeout(limit)),
    }
}
