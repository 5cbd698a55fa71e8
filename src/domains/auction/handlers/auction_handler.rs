// Auction Handler
// 경매 핸들러
// 역할: 광고 선택(경매 + 정산) API 엔드포인트 처리

use axum::{extract::State, http::StatusCode, Json};

use crate::domains::auction::models::ChooseAdResponse;
use crate::shared::services::AppState;

/// 광고 선택 핸들러
/// Choose ad
///
/// 경로: GET /api/ads/choose
///
/// 모든 광고를 bid * ad_score 로 순위를 매기고, 2위 광고로 1위 광고의 가격을
/// 계산한 뒤 광고주 예산을 차감함. 차감까지 성공해야 200 을 반환함.
///
/// # Returns
/// * `200 OK` - 낙찰 광고
/// * `400 Bad Request` - 광고가 2개 미만
/// * `500 Internal Server Error` - 품질 점수 0, 저장소 오류
#[utoipa::path(
    get,
    path = "/api/ads/choose",
    responses(
        (status = 200, description = "Winning ad, charged to its advertiser", body = ChooseAdResponse),
        (status = 400, description = "No enough ads in database"),
        (status = 500, description = "Degenerate auction or store failure")
    ),
    tag = "Auction"
)]
pub async fn choose_ad(
    State(app_state): State<AppState>,
) -> Result<Json<ChooseAdResponse>, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one request for choosing an ad");

    let settlement = app_state.auction_state.auction_service.choose_ad().await?;

    Ok(Json(ChooseAdResponse {
        runner_up_ad_id: settlement.outcome.runner_up.id,
        charge: settlement.outcome.charge,
        ad: settlement.outcome.winner,
        remaining_budget: settlement.remaining_budget,
        settled_at: settlement.settled_at,
    }))
}
