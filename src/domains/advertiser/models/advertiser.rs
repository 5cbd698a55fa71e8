use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// Advertiser 모델
// =====================================================
// 역할: 광고주와 남은 예산
// 설명: 예산은 경매 정산(차감)과 충전(증가)으로만 바뀜
//       0 아래로 내려갈 수 있음 (하한 없음)
// =====================================================

/// 광고주 정보
/// Advertiser information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = Advertiser)]
pub struct Advertiser {
    /// Advertiser ID (assigned by the store)
    /// 광고주 ID (저장소에서 자동 생성)
    #[serde(rename = "advertiser_id")]
    pub id: u64,

    /// Unique advertiser name
    /// 광고주 이름 (중복 불가)
    #[schema(example = "Fangyuan")]
    pub name: String,

    /// Remaining budget (may be negative)
    /// 남은 예산 (음수 가능)
    #[schema(example = 10000.0)]
    pub budget: f64,
}

// 광고주 생성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateAdvertiserRequest)]
pub struct CreateAdvertiserRequest {
    #[schema(example = "Fangyuan")]
    pub name: String,

    /// Initial budget (defaults to 0)
    /// 초기 예산 (생략 시 0)
    #[serde(default)]
    #[schema(example = 10000.0)]
    pub budget: f64,
}

// 광고주 응답 모델 (생성/검색 공통)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = AdvertiserResponse)]
pub struct AdvertiserResponse {
    pub advertiser: Advertiser,
    pub message: String,
}

// 이름으로 광고주 검색 요청
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SearchAdvertiserRequest)]
pub struct SearchAdvertiserRequest {
    #[schema(example = "Fangyuan")]
    pub name: String,
}

/// 예산 충전 요청
/// Budget top-up request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = AddBudgetRequest)]
pub struct AddBudgetRequest {
    #[schema(example = 1)]
    pub advertiser_id: u64,

    /// Amount added to the current budget
    /// 현재 예산에 더할 금액
    #[serde(alias = "amount")]
    #[schema(example = 500.0)]
    pub add_budget: f64,
}

/// 예산 응답
/// Budget after an adjustment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = BudgetResponse)]
pub struct BudgetResponse {
    pub advertiser_id: u64,
    pub budget: f64,
    pub message: String,
}
