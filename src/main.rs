use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use ad_server::api_doc::ApiDoc;
use ad_server::routes::create_router;
use ad_server::shared::config::{AppConfig, LedgerBackend};
use ad_server::shared::database::{Database, LedgerStore, MemoryLedgerStore, PgLedgerStore};
use ad_server::shared::services::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // 로그 초기화 (LOG_LEVEL, 기본값 info)
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|value| Level::from_str(&value).ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = AppConfig::from_env();

    // 원장 저장소 생성 (하나만 만들어 모든 서비스가 공유)
    let store: Arc<dyn LedgerStore> = match config.ledger_backend {
        LedgerBackend::Postgres => {
            let db = Database::new(&config).await?;
            db.initialize().await?;
            Arc::new(PgLedgerStore::new(db, config.store_timeout))
        }
        LedgerBackend::Memory => {
            tracing::warn!("Using in-memory ledger; data is lost on restart");
            Arc::new(MemoryLedgerStore::new())
        }
    };

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(store, &config);

    // CORS 설정
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    // Router 생성
    let app = Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %config.bind_addr,
        backend = ?config.ledger_backend,
        "Ad server running (Swagger UI at /api/docs)"
    );

    axum::serve(listener, app).await.context("Server terminated")?;
    Ok(())
}
