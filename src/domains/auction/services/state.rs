// Auction domain state
// 경매 도메인 상태
use std::sync::Arc;
use std::time::Duration;

use crate::domains::auction::services::AuctionService;
use crate::shared::database::LedgerStore;

#[derive(Clone)]
pub struct AuctionState {
    pub auction_service: AuctionService,
}

impl AuctionState {
    pub fn new(store: Arc<dyn LedgerStore>, store_timeout: Duration) -> Self {
        Self {
            auction_service: AuctionService::new(store, store_timeout),
        }
    }
}
