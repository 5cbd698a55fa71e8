// Ad domain routes
// 광고 도메인 라우터
use axum::{
    routing::{get, post},
    Router,
};

use crate::domains::ad::handlers::ad_handler;
use crate::domains::auction::handlers::auction_handler;
use crate::shared::services::AppState;

/// Create ad router
/// 광고 라우터 생성
///
/// # Routes
/// - `POST /api/ads`        - 광고 등록
/// - `POST /api/ads/search` - 광고주별 광고 검색
/// - `POST /api/ads/delete` - 광고 삭제
/// - `GET  /api/ads/choose` - 경매로 광고 선택 + 예산 차감
pub fn create_ad_router() -> Router<AppState> {
    Router::new()
        .route("/", post(ad_handler::create_ad))
        .route("/search", post(ad_handler::search_ads))
        .route("/delete", post(ad_handler::delete_ad))
        .route("/choose", get(auction_handler::choose_ad))
}
