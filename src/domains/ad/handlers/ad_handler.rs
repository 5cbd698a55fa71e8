// Ad Handler
// 광고 핸들러
// 역할: 광고 등록/검색/삭제 API 엔드포인트 처리

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};

use crate::domains::ad::models::{
    AdsResponse, CreateAdRequest, CreateAdResponse, DeleteAdRequest, DeleteAdResponse,
    SearchAdsRequest,
};
use crate::shared::errors::ApiError;
use crate::shared::services::AppState;

/// 광고 등록 핸들러
/// Add ad
///
/// 경로: POST /api/ads
#[utoipa::path(
    post,
    path = "/api/ads",
    request_body = CreateAdRequest,
    responses(
        (status = 201, description = "Ad added successfully", body = CreateAdResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Advertiser not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ads"
)]
pub async fn create_ad(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateAdRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAdResponse>), (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one ad insertion request");
    let Json(request) = payload.map_err(ApiError::from)?;

    let ad = app_state
        .ad_state
        .ad_service
        .create_ad(request.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAdResponse {
            ad,
            message: "Ad added successfully".to_string(),
        }),
    ))
}

/// 광고주별 광고 검색 핸들러
/// Search ads by advertiser id
///
/// 경로: POST /api/ads/search
#[utoipa::path(
    post,
    path = "/api/ads/search",
    request_body = SearchAdsRequest,
    responses(
        (status = 200, description = "Ads of the advertiser", body = AdsResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ads"
)]
pub async fn search_ads(
    State(app_state): State<AppState>,
    payload: Result<Json<SearchAdsRequest>, JsonRejection>,
) -> Result<Json<AdsResponse>, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one search ads request");
    let Json(request) = payload.map_err(ApiError::from)?;

    let ads = app_state
        .ad_state
        .ad_service
        .search_ads_by_advertiser(request.advertiser_id)
        .await?;

    Ok(Json(AdsResponse { ads }))
}

/// 광고 삭제 핸들러
/// Delete ad
///
/// 경로: POST /api/ads/delete
#[utoipa::path(
    post,
    path = "/api/ads/delete",
    request_body = DeleteAdRequest,
    responses(
        (status = 200, description = "Delete processed", body = DeleteAdResponse),
        (status = 400, description = "Malformed body"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Ads"
)]
pub async fn delete_ad(
    State(app_state): State<AppState>,
    payload: Result<Json<DeleteAdRequest>, JsonRejection>,
) -> Result<Json<DeleteAdResponse>, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one ad deletion request");
    let Json(request) = payload.map_err(ApiError::from)?;

    let deleted = app_state
        .ad_state
        .ad_service
        .delete_ad(request.ad_id)
        .await?;

    let message = if deleted {
        "Successfully deleted an ad."
    } else {
        "No ad with this id."
    };

    Ok(Json(DeleteAdResponse {
        ad_id: request.ad_id,
        deleted,
        message: message.to_string(),
    }))
}
