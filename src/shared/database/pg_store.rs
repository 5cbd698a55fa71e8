// =====================================================
// PgLedgerStore - PostgreSQL 원장
// =====================================================
// 역할: Repository 들을 조합해 LedgerStore 를 구현
//
// 에러 변환:
// - UNIQUE 위반 (23505)      → DuplicateName
// - 외래키 위반 (23503)      → AdvertiserNotFound
// - 예산 증감 커밋 전 시간 초과 → Timeout (롤백됨)
// - 그 외 모든 sqlx/anyhow 에러 → DatabaseError
// =====================================================

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::error::Elapsed;

use crate::domains::ad::models::{Ad, NewAd};
use crate::domains::advertiser::models::Advertiser;
use crate::shared::database::{AdRepository, AdvertiserRepository, Database, LedgerStore};
use crate::shared::errors::LedgerError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL 기반 원장 저장소
#[derive(Clone)]
pub struct PgLedgerStore {
    db: Database,
    /// 예산 증감 트랜잭션의 커밋 전 구간 제한 시간
    store_timeout: Duration,
}

impl PgLedgerStore {
    pub fn new(db: Database, store_timeout: Duration) -> Self {
        Self { db, store_timeout }
    }

    fn advertisers(&self) -> AdvertiserRepository {
        AdvertiserRepository::new(self.db.pool().clone())
    }

    fn ads(&self) -> AdRepository {
        AdRepository::new(self.db.pool().clone())
    }
}

/// context 로 감싼 에러에서 Postgres SQLSTATE 추출
fn sqlstate(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}

fn timed_out(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Elapsed>().is_some()
}

fn database_error(err: anyhow::Error) -> LedgerError {
    LedgerError::DatabaseError(format!("{:#}", err))
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn list_all_ads(&self) -> Result<Vec<Ad>, LedgerError> {
        self.ads().get_all().await.map_err(database_error)
    }

    async fn insert_ad(&self, ad: NewAd) -> Result<u64, LedgerError> {
        let advertiser_id = ad.advertiser_id;
        match self.ads().create(&ad).await {
            Ok(created) => Ok(created.id),
            Err(e) if sqlstate(&e).as_deref() == Some(FOREIGN_KEY_VIOLATION) => {
                Err(LedgerError::AdvertiserNotFound { id: advertiser_id })
            }
            Err(e) => Err(database_error(e)),
        }
    }

    async fn delete_ad(&self, ad_id: u64) -> Result<bool, LedgerError> {
        self.ads().delete(ad_id).await.map_err(database_error)
    }

    async fn find_ads_by_advertiser(&self, advertiser_id: u64) -> Result<Vec<Ad>, LedgerError> {
        self.ads()
            .get_by_advertiser(advertiser_id)
            .await
            .map_err(database_error)
    }

    async fn insert_advertiser(&self, name: &str, budget: f64) -> Result<u64, LedgerError> {
        // 존재 확인과 INSERT 사이의 경쟁은 UNIQUE 제약이 막아줌
        match self.advertisers().create(name, budget).await {
            Ok(created) => Ok(created.id),
            Err(e) if sqlstate(&e).as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(LedgerError::DuplicateName { name: name.to_string() })
            }
            Err(e) => Err(database_error(e)),
        }
    }

    async fn advertiser_exists(&self, name: &str) -> Result<bool, LedgerError> {
        self.advertisers()
            .exists_by_name(name)
            .await
            .map_err(database_error)
    }

    async fn find_advertiser_by_name(&self, name: &str) -> Result<Advertiser, LedgerError> {
        self.advertisers()
            .get_by_name(name)
            .await
            .map_err(database_error)?
            .ok_or_else(|| LedgerError::AdvertiserNotFoundByName { name: name.to_string() })
    }

    async fn get_budget(&self, advertiser_id: u64) -> Result<f64, LedgerError> {
        self.advertisers()
            .get_budget(advertiser_id)
            .await
            .map_err(database_error)?
            .ok_or(LedgerError::AdvertiserNotFound { id: advertiser_id })
    }

    async fn set_budget(&self, advertiser_id: u64, budget: f64) -> Result<(), LedgerError> {
        let updated = self
            .advertisers()
            .set_budget(advertiser_id, budget)
            .await
            .map_err(database_error)?;

        if updated {
            Ok(())
        } else {
            Err(LedgerError::AdvertiserNotFound { id: advertiser_id })
        }
    }

    async fn adjust_budget(&self, advertiser_id: u64, delta: f64) -> Result<f64, LedgerError> {
        match self
            .advertisers()
            .adjust_budget(advertiser_id, delta, self.store_timeout)
            .await
        {
            Ok(Some(budget)) => Ok(budget),
            Ok(None) => Err(LedgerError::AdvertiserNotFound { id: advertiser_id }),
            Err(e) if timed_out(&e) => Err(LedgerError::Timeout(self.store_timeout)),
            Err(e) => Err(database_error(e)),
        }
    }
}
