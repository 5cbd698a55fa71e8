use std::sync::Arc;
use std::time::Duration;

use crate::domains::advertiser::models::{Advertiser, CreateAdvertiserRequest};
use crate::shared::database::{LedgerStore, within_deadline};
use crate::shared::errors::{ApiError, LedgerError};

/// 광고주 서비스
/// Advertiser Service
///
/// 역할:
/// - 광고주 등록 (이름 중복 확인)
/// - 이름으로 광고주 검색
/// - 예산 충전 (원자적 증감)
#[derive(Clone)]
pub struct AdvertiserService {
    store: Arc<dyn LedgerStore>,
    store_timeout: Duration,
}

impl AdvertiserService {
    pub fn new(store: Arc<dyn LedgerStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// 광고주 등록
    /// Register a new advertiser
    ///
    /// # Returns
    /// * `Ok(Advertiser)` - 생성된 광고주
    /// * `Err(DuplicateName)` - 같은 이름의 광고주가 이미 존재 (저장소 변경 없음)
    pub async fn create_advertiser(
        &self,
        request: CreateAdvertiserRequest,
    ) -> Result<Advertiser, ApiError> {
        // 1. 이름 중복 확인
        if self.advertiser_exists(&request.name).await? {
            return Err(LedgerError::DuplicateName { name: request.name }.into());
        }

        // 2. 광고주 생성 (동시 등록 경쟁은 저장소가 DuplicateName 으로 거절)
        let id = within_deadline(
            self.store_timeout,
            self.store.insert_advertiser(&request.name, request.budget),
        )
        .await?;

        tracing::info!(advertiser_id = id, name = %request.name, "Advertiser added");

        Ok(Advertiser {
            id,
            name: request.name,
            budget: request.budget,
        })
    }

    /// 이름 존재 여부 확인
    /// "없음"(false)과 조회 실패(Err)를 구분함
    pub async fn advertiser_exists(&self, name: &str) -> Result<bool, ApiError> {
        Ok(within_deadline(self.store_timeout, self.store.advertiser_exists(name)).await?)
    }

    /// 이름으로 광고주 검색
    pub async fn search_advertiser(&self, name: &str) -> Result<Advertiser, ApiError> {
        Ok(within_deadline(self.store_timeout, self.store.find_advertiser_by_name(name)).await?)
    }

    /// 예산 충전
    /// Top up (or, with a negative amount, reduce) an advertiser's budget
    ///
    /// # Returns
    /// * `Ok(f64)` - 충전 후 예산
    pub async fn add_budget(&self, advertiser_id: u64, amount: f64) -> Result<f64, ApiError> {
        // 시간 제한은 저장소가 커밋 전에 적용
        let budget = self.store.adjust_budget(advertiser_id, amount).await?;

        tracing::info!(advertiser_id, amount, budget, "Budget added");
        Ok(budget)
    }
}
