use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// Ad 모델
// =====================================================
// 역할: 광고 한 건 (입찰가 + 품질 점수)
// 설명: 경매 순위는 bid * ad_score 로 결정됨
//
// NULL 처리:
// - image_url 없음 → ""
// - ad_score 없음 → 0
// =====================================================

/// 광고 정보 (데이터베이스에서 조회한 광고)
/// Advertisement stored in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = Ad)]
pub struct Ad {
    /// Ad ID (assigned by the store)
    /// 광고 ID (저장소에서 자동 생성)
    #[serde(rename = "ad_id")]
    pub id: u64,

    /// Bid per click
    /// 클릭당 입찰가
    #[schema(example = 10.0)]
    pub bid: f64,

    /// Creative image URL
    /// 광고 이미지 URL
    #[serde(default)]
    #[schema(example = "https://cdn.example.com/banner.png")]
    pub image_url: String,

    /// Owner advertiser ID
    /// 광고주 ID
    pub advertiser_id: u64,

    /// Quality score
    /// 품질 점수
    #[serde(rename = "ad_score", alias = "score", default)]
    #[schema(example = 2.0)]
    pub score: f64,
}

impl Ad {
    /// 경매 순위 (bid * score)
    /// Auction rank
    pub fn rank(&self) -> f64 {
        self.bid * self.score
    }
}

/// 광고 생성 시 사용하는 내부 모델 (DB 저장용)
/// Internal model for inserting an ad
#[derive(Debug, Clone, PartialEq)]
pub struct NewAd {
    pub bid: f64,
    pub image_url: String,
    pub advertiser_id: u64,
    pub score: f64,
}

impl NewAd {
    pub fn into_ad(self, id: u64) -> Ad {
        Ad {
            id,
            bid: self.bid,
            image_url: self.image_url,
            advertiser_id: self.advertiser_id,
            score: self.score,
        }
    }
}

// =====================================================
// 요청/응답 (Request / Response)
// =====================================================

// 광고 생성 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateAdRequest)]
pub struct CreateAdRequest {
    #[schema(example = 10.0)]
    pub bid: f64,

    #[serde(default)]
    #[schema(example = "https://cdn.example.com/banner.png")]
    pub image_url: String,

    #[schema(example = 1)]
    pub advertiser_id: u64,

    /// Quality score (defaults to 0 when omitted)
    /// 품질 점수 (생략 시 0)
    #[serde(rename = "ad_score", alias = "score", default)]
    #[schema(example = 2.0)]
    pub score: f64,
}

impl From<CreateAdRequest> for NewAd {
    fn from(request: CreateAdRequest) -> Self {
        Self {
            bid: request.bid,
            image_url: request.image_url,
            advertiser_id: request.advertiser_id,
            score: request.score,
        }
    }
}

// 광고 생성 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateAdResponse)]
pub struct CreateAdResponse {
    pub ad: Ad,
    pub message: String,
}

// 광고주별 광고 검색 요청
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SearchAdsRequest)]
pub struct SearchAdsRequest {
    #[schema(example = 1)]
    pub advertiser_id: u64,
}

/// 광고 목록 응답 모델
/// Ads list response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = AdsResponse)]
pub struct AdsResponse {
    pub ads: Vec<Ad>,
}

// 광고 삭제 요청
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = DeleteAdRequest)]
pub struct DeleteAdRequest {
    #[schema(example = 1)]
    pub ad_id: u64,
}

// 광고 삭제 응답
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = DeleteAdResponse)]
pub struct DeleteAdResponse {
    pub ad_id: u64,
    /// false when no ad had this id
    pub deleted: bool,
    pub message: String,
}
