// Advertiser Handler
// 광고주 핸들러
// 역할: 광고주 등록/검색/예산 충전 API 엔드포인트 처리

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, Json};

use crate::domains::advertiser::models::{
    AddBudgetRequest, AdvertiserResponse, BudgetResponse, CreateAdvertiserRequest,
    SearchAdvertiserRequest,
};
use crate::shared::errors::ApiError;
use crate::shared::services::AppState;

/// 광고주 등록 핸들러
/// Register advertiser
///
/// 경로: POST /api/advertisers
#[utoipa::path(
    post,
    path = "/api/advertisers",
    request_body = CreateAdvertiserRequest,
    responses(
        (status = 201, description = "Advertiser added successfully", body = AdvertiserResponse),
        (status = 400, description = "Malformed body or advertiser already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Advertisers"
)]
pub async fn create_advertiser(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateAdvertiserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AdvertiserResponse>), (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one advertiser insertion request");
    let Json(request) = payload.map_err(ApiError::from)?;

    let advertiser = app_state
        .advertiser_state
        .advertiser_service
        .create_advertiser(request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AdvertiserResponse {
            advertiser,
            message: "Advertiser added successfully".to_string(),
        }),
    ))
}

/// 이름으로 광고주 검색 핸들러
/// Search advertiser by name
///
/// 경로: POST /api/advertisers/search
#[utoipa::path(
    post,
    path = "/api/advertisers/search",
    request_body = SearchAdvertiserRequest,
    responses(
        (status = 200, description = "Advertiser found", body = AdvertiserResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Advertiser not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Advertisers"
)]
pub async fn search_advertiser(
    State(app_state): State<AppState>,
    payload: Result<Json<SearchAdvertiserRequest>, JsonRejection>,
) -> Result<Json<AdvertiserResponse>, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one search advertiser request");
    let Json(request) = payload.map_err(ApiError::from)?;

    let advertiser = app_state
        .advertiser_state
        .advertiser_service
        .search_advertiser(&request.name)
        .await?;

    Ok(Json(AdvertiserResponse {
        advertiser,
        message: "Advertiser found".to_string(),
    }))
}

/// 예산 충전 핸들러
/// Add budget
///
/// 경로: POST /api/advertisers/budget
#[utoipa::path(
    post,
    path = "/api/advertisers/budget",
    request_body = AddBudgetRequest,
    responses(
        (status = 200, description = "Budget added successfully", body = BudgetResponse),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "Advertiser not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Advertisers"
)]
pub async fn add_budget(
    State(app_state): State<AppState>,
    payload: Result<Json<AddBudgetRequest>, JsonRejection>,
) -> Result<Json<BudgetResponse>, (StatusCode, Json<serde_json::Value>)> {
    tracing::info!("Received one add budget request");
    let Json(request) = payload.map_err(ApiError::from)?;

    let budget = app_state
        .advertiser_state
        .advertiser_service
        .add_budget(request.advertiser_id, request.add_budget)
        .await?;

    Ok(Json(BudgetResponse {
        advertiser_id: request.advertiser_id,
        budget,
        message: "Budget added successfully".to_string(),
    }))
}
