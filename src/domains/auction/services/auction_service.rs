use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domains::auction::engine::{AuctionOutcome, select_winner};
use crate::shared::database::{LedgerStore, within_deadline};
use crate::shared::errors::ApiError;

/// 경매 + 정산 결과
/// Auction outcome after the winner's budget was debited
#[derive(Debug, Clone)]
pub struct Settlement {
    pub outcome: AuctionOutcome,
    /// 차감 후 광고주 예산 (음수 가능)
    pub remaining_budget: f64,
    pub settled_at: DateTime<Utc>,
}

/// 경매 서비스
/// Auction Service
///
/// 처리 과정:
/// 1. 저장소에서 모든 광고 조회
/// 2. GSP 엔진으로 1위/2위 선택 및 가격 계산
/// 3. 낙찰 광고주 예산 원자적 차감
///
/// 2단계가 실패하면 과금하지 않음. 3단계가 실패하면 요청 전체가 실패함
/// (선택과 정산은 하나의 결과로만 보고됨)
#[derive(Clone)]
pub struct AuctionService {
    store: Arc<dyn LedgerStore>,
    store_timeout: Duration,
}

impl AuctionService {
    pub fn new(store: Arc<dyn LedgerStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// 광고 선택 및 정산
    /// Run one auction over every stored ad and charge the winner
    pub async fn choose_ad(&self) -> Result<Settlement, ApiError> {
        // 1. 모든 광고 조회
        let ads = within_deadline(self.store_timeout, self.store.list_all_ads()).await?;

        // 2. 1위/2위 선택 (실패 시 과금 없음)
        let outcome = select_winner(&ads)?;

        // 3. 낙찰 광고주 예산 차감
        // 시간 제한은 저장소가 커밋 전에 적용 (차감되었으면 반드시 성공으로 보고)
        let remaining_budget = self
            .store
            .adjust_budget(outcome.winner.advertiser_id, -outcome.charge)
            .await?;

        tracing::info!(
            ad_id = outcome.winner.id,
            advertiser_id = outcome.winner.advertiser_id,
            charge = outcome.charge,
            remaining_budget,
            "Ad chosen and settled"
        );

        Ok(Settlement {
            outcome,
            remaining_budget,
            settled_at: Utc::now(),
        })
    }
}
