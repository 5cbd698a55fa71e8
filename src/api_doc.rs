// OpenAPI 스키마 정의: Swagger 문서 자동 생성
use utoipa::OpenApi;

use crate::domains::ad::models::*;
use crate::domains::advertiser::models::*;
use crate::domains::auction::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::domains::advertiser::handlers::advertiser_handler::create_advertiser,
        crate::domains::advertiser::handlers::advertiser_handler::search_advertiser,
        crate::domains::advertiser::handlers::advertiser_handler::add_budget,
        crate::domains::ad::handlers::ad_handler::create_ad,
        crate::domains::ad::handlers::ad_handler::search_ads,
        crate::domains::ad::handlers::ad_handler::delete_ad,
        crate::domains::auction::handlers::auction_handler::choose_ad
    ),
    components(schemas(
        Advertiser,
        CreateAdvertiserRequest,
        AdvertiserResponse,
        SearchAdvertiserRequest,
        AddBudgetRequest,
        BudgetResponse,
        Ad,
        CreateAdRequest,
        CreateAdResponse,
        SearchAdsRequest,
        AdsResponse,
        DeleteAdRequest,
        DeleteAdResponse,
        ChooseAdResponse
    )),
    tags(
        (name = "Advertisers", description = "Advertiser registration, search and budget top-up"),
        (name = "Ads", description = "Ad registration, search and deletion"),
        (name = "Auction", description = "GSP ad selection and budget settlement")
    ),
    info(
        title = "Ad Server",
        description = "Ad serving API with generalized second-price selection",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/advertisers",
            "/api/advertisers/search",
            "/api/advertisers/budget",
            "/api/ads",
            "/api/ads/search",
            "/api/ads/delete",
            "/api/ads/choose",
        ] {
            assert!(
                doc.paths.paths.contains_key(expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}
