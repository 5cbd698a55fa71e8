use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::ad::models::Ad;

/// 광고 선택 응답 (경매 + 정산 결과)
/// Winning ad together with what its advertiser was charged
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ChooseAdResponse)]
pub struct ChooseAdResponse {
    /// Winning ad
    /// 낙찰된 광고
    pub ad: Ad,

    /// Amount debited from the winner's advertiser
    /// 광고주 예산에서 차감된 금액
    #[schema(example = 6.676667)]
    pub charge: f64,

    /// Ad whose rank set the price
    /// 가격 결정에 사용된 2위 광고 ID
    pub runner_up_ad_id: u64,

    /// Advertiser budget after settlement
    /// 정산 후 남은 예산
    pub remaining_budget: f64,

    pub settled_at: DateTime<Utc>,
}
