use std::sync::Arc;

use crate::domains::ad::services::state::AdState;
use crate::domains::advertiser::services::state::AdvertiserState;
use crate::domains::auction::services::state::AuctionState;
use crate::shared::config::AppConfig;
use crate::shared::database::LedgerStore;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 원장 저장소는 하나만 만들어 모든 도메인 서비스에 주입함
#[derive(Clone)]
pub struct AppState {
    pub advertiser_state: AdvertiserState,
    pub ad_state: AdState,
    pub auction_state: AuctionState,
}

impl AppState {
    /// Create AppState with a ledger store
    /// 모든 도메인 State를 초기화하고 조합
    pub fn new(store: Arc<dyn LedgerStore>, config: &AppConfig) -> Self {
        let timeout = config.store_timeout;

        Self {
            advertiser_state: AdvertiserState::new(store.clone(), timeout),
            ad_state: AdState::new(store.clone(), timeout),
            auction_state: AuctionState::new(store, timeout),
        }
    }
}
