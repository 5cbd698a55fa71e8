// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업/요청 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let (app, store) = setup_test_app();
//     let (status, body) = post_json(&app, "/api/advertisers", json!({...})).await;
// }
// ```
//
// 메모리 원장을 사용하므로 DB 없이 실행됨
// =====================================================
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ad_server::domains::ad::models::{Ad, NewAd};
use ad_server::domains::advertiser::models::Advertiser;
use ad_server::routes::create_router;
use ad_server::shared::config::AppConfig;
use ad_server::shared::database::{LedgerStore, MemoryLedgerStore};
use ad_server::shared::errors::LedgerError;
use ad_server::shared::services::AppState;

/// 테스트 앱 생성
///
/// 라우터와 같은 메모리 원장을 함께 반환 (저장소 상태 직접 확인용)
pub fn setup_test_app() -> (Router, Arc<MemoryLedgerStore>) {
    let store = Arc::new(MemoryLedgerStore::new());
    let app = setup_test_app_with_store(store.clone());
    (app, store)
}

/// 임의의 원장으로 테스트 앱 생성
pub fn setup_test_app_with_store(store: Arc<dyn LedgerStore>) -> Router {
    let app_state = AppState::new(store, &AppConfig::default());
    create_router().with_state(app_state)
}

// =====================================================
// 장애 주입 원장
// =====================================================
// 메모리 원장을 감싸고, 스위치를 켜면 광고 조회 또는 예산 증감이
// 변경 없이 DatabaseError 로 실패함
// =====================================================

#[derive(Default)]
pub struct FaultyLedgerStore {
    inner: MemoryLedgerStore,
    listing_down: AtomicBool,
    settlement_down: AtomicBool,
}

impl FaultyLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_listing(&self) {
        self.listing_down.store(true, Ordering::SeqCst);
    }

    pub fn fail_settlement(&self) {
        self.settlement_down.store(true, Ordering::SeqCst);
    }

    fn outage(what: &str) -> LedgerError {
        LedgerError::DatabaseError(format!("{what}: connection reset by peer"))
    }
}

#[async_trait]
impl LedgerStore for FaultyLedgerStore {
    async fn list_all_ads(&self) -> Result<Vec<Ad>, LedgerError> {
        if self.listing_down.load(Ordering::SeqCst) {
            return Err(Self::outage("list ads"));
        }
        self.inner.list_all_ads().await
    }

    async fn insert_ad(&self, ad: NewAd) -> Result<u64, LedgerError> {
        self.inner.insert_ad(ad).await
    }

    async fn delete_ad(&self, ad_id: u64) -> Result<bool, LedgerError> {
        self.inner.delete_ad(ad_id).await
    }

    async fn find_ads_by_advertiser(&self, advertiser_id: u64) -> Result<Vec<Ad>, LedgerError> {
        self.inner.find_ads_by_advertiser(advertiser_id).await
    }

    async fn insert_advertiser(&self, name: &str, budget: f64) -> Result<u64, LedgerError> {
        self.inner.insert_advertiser(name, budget).await
    }

    async fn advertiser_exists(&self, name: &str) -> Result<bool, LedgerError> {
        self.inner.advertiser_exists(name).await
    }

    async fn find_advertiser_by_name(&self, name: &str) -> Result<Advertiser, LedgerError> {
        self.inner.find_advertiser_by_name(name).await
    }

    async fn get_budget(&self, advertiser_id: u64) -> Result<f64, LedgerError> {
        self.inner.get_budget(advertiser_id).await
    }

    async fn set_budget(&self, advertiser_id: u64, budget: f64) -> Result<(), LedgerError> {
        self.inner.set_budget(advertiser_id, budget).await
    }

    async fn adjust_budget(&self, advertiser_id: u64, delta: f64) -> Result<f64, LedgerError> {
        if self.settlement_down.load(Ordering::SeqCst) {
            return Err(Self::outage("adjust budget"));
        }
        self.inner.adjust_budget(advertiser_id, delta).await
    }
}

/// 요청 전송 후 (상태 코드, JSON 본문) 반환
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

/// 임의 문자열 본문으로 POST (잘못된 JSON 테스트용)
pub async fn post_raw(app: &Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .expect("Failed to build request");
    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

/// 광고주 등록 후 ID 반환
pub async fn create_advertiser(app: &Router, name: &str, budget: f64) -> u64 {
    let (status, body) = post_json(
        app,
        "/api/advertisers",
        json!({ "name": name, "budget": budget }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create advertiser failed: {body}");
    body["advertiser"]["advertiser_id"]
        .as_u64()
        .expect("advertiser_id missing")
}

/// 광고 등록 후 ID 반환
pub async fn create_ad(app: &Router, advertiser_id: u64, bid: f64, score: f64) -> u64 {
    let (status, body) = post_json(
        app,
        "/api/ads",
        json!({
            "bid": bid,
            "image_url": "https://cdn.example.com/banner.png",
            "advertiser_id": advertiser_id,
            "ad_score": score,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create ad failed: {body}");
    body["ad"]["ad_id"].as_u64().expect("ad_id missing")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
