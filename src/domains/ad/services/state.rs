// Ad domain state
// 광고 도메인 상태
use std::sync::Arc;
use std::time::Duration;

use crate::domains::ad::services::AdService;
use crate::shared::database::LedgerStore;

#[derive(Clone)]
pub struct AdState {
    pub ad_service: AdService,
}

impl AdState {
    pub fn new(store: Arc<dyn LedgerStore>, store_timeout: Duration) -> Self {
        Self {
            ad_service: AdService::new(store, store_timeout),
        }
    }
}
