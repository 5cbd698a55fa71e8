// Advertiser domain routes
// 광고주 도메인 라우터
use axum::{routing::post, Router};

use crate::domains::advertiser::handlers::advertiser_handler;
use crate::shared::services::AppState;

/// Create advertiser router
/// 광고주 라우터 생성
///
/// - `POST /api/advertisers`        - 광고주 등록
/// - `POST /api/advertisers/search` - 이름으로 검색
/// - `POST /api/advertisers/budget` - 예산 충전
pub fn create_advertiser_router() -> Router<AppState> {
    Router::new()
        .route("/", post(advertiser_handler::create_advertiser))
        .route("/search", post(advertiser_handler::search_advertiser))
        .route("/budget", post(advertiser_handler::add_budget))
}
