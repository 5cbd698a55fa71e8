// Advertiser domain state
// 광고주 도메인 상태
use std::sync::Arc;
use std::time::Duration;

use crate::domains::advertiser::services::AdvertiserService;
use crate::shared::database::LedgerStore;

/// Advertiser domain state
/// 광고주 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AdvertiserState {
    pub advertiser_service: AdvertiserService,
}

impl AdvertiserState {
    pub fn new(store: Arc<dyn LedgerStore>, store_timeout: Duration) -> Self {
        Self {
            advertiser_service: AdvertiserService::new(store, store_timeout),
        }
    }
}
