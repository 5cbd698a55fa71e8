use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

use crate::domains::auction::engine::AuctionError;
use crate::shared::errors::LedgerError;

/// API 경계 에러 (핸들러가 반환하는 모든 에러)
/// Every failure a handler can report to the client
#[derive(Error, Debug)]
pub enum ApiError {
    /// 요청 본문 디코딩 실패
    /// Malformed request body
    #[error("Cannot decode request body: {0}")]
    InputDecode(String),

    /// 디코딩은 됐지만 값이 허용 범위 밖
    /// Well-formed body with an out-of-range field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 저장소 에러 (중복 이름, 미존재, 타임아웃, DB 에러)
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// 경매 에러 (후보 부족, 품질 점수 0)
    #[error(transparent)]
    Auction(#[from] AuctionError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InputDecode(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Ledger(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Ledger(LedgerError::DuplicateName { .. }) => StatusCode::BAD_REQUEST,
            // 타임아웃, DB 에러
            ApiError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auction(err) => match err {
                AuctionError::InsufficientCandidates { .. } => StatusCode::BAD_REQUEST,
                AuctionError::DegenerateAuction { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InputDecode(rejection.body_text())
    }
}

/// ApiError를 HTTP 응답으로 변환
impl From<ApiError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ApiError) -> Self {
        let status = err.status_code();
        if status.is_server_error() {
            tracing::error!(error = %err, "Request failed");
        } else {
            tracing::warn!(error = %err, "Request rejected");
        }

        (status, Json(json!({ "error": err.to_string() })))
    }
}
