use std::sync::Arc;
use std::time::Duration;

use crate::domains::ad::models::{Ad, NewAd};
use crate::shared::database::{LedgerStore, within_deadline};
use crate::shared::errors::ApiError;

/// 광고 서비스
/// Ad Service
#[derive(Clone)]
pub struct AdService {
    store: Arc<dyn LedgerStore>,
    store_timeout: Duration,
}

impl AdService {
    pub fn new(store: Arc<dyn LedgerStore>, store_timeout: Duration) -> Self {
        Self {
            store,
            store_timeout,
        }
    }

    /// 광고 등록
    /// 광고주가 없으면 AdvertiserNotFound (저장소의 외래키 제약)
    ///
    /// bid, ad_score 는 0 이상이어야 함
    pub async fn create_ad(&self, ad: NewAd) -> Result<Ad, ApiError> {
        if !(ad.bid >= 0.0 && ad.score >= 0.0) {
            return Err(ApiError::InvalidInput(format!(
                "bid and ad_score must be non-negative (bid={}, ad_score={})",
                ad.bid, ad.score
            )));
        }

        let id = within_deadline(self.store_timeout, self.store.insert_ad(ad.clone())).await?;

        tracing::info!(ad_id = id, advertiser_id = ad.advertiser_id, "Ad added");
        Ok(ad.into_ad(id))
    }

    /// 광고주 ID로 광고 검색
    pub async fn search_ads_by_advertiser(&self, advertiser_id: u64) -> Result<Vec<Ad>, ApiError> {
        Ok(within_deadline(
            self.store_timeout,
            self.store.find_ads_by_advertiser(advertiser_id),
        )
        .await?)
    }

    /// 광고 삭제
    ///
    /// # Returns
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 광고가 없었음
    pub async fn delete_ad(&self, ad_id: u64) -> Result<bool, ApiError> {
        let deleted = within_deadline(self.store_timeout, self.store.delete_ad(ad_id)).await?;

        tracing::info!(ad_id, deleted, "Ad delete processed");
        Ok(deleted)
    }
}
