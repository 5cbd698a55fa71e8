use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::advertiser::models::Advertiser;

pub struct AdvertiserRepository {
    pool: PgPool,
}

fn advertiser_from_row(row: &PgRow) -> Result<Advertiser, sqlx::Error> {
    Ok(Advertiser {
        id: row.try_get::<i64, _>("advertiser_id")? as u64,
        name: row.try_get("name")?,
        budget: row.try_get("budget")?,
    })
}

impl AdvertiserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 광고주 생성
    /// Create advertiser (UNIQUE(name) 위반 시 sqlx Database 에러)
    pub async fn create(&self, name: &str, budget: f64) -> Result<Advertiser> {
        let row = sqlx::query(
            r#"
            INSERT INTO advertisers (name, budget)
            VALUES ($1, $2)
            RETURNING advertiser_id, name, budget
            "#,
        )
        .bind(name)
        .bind(budget)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert into advertisers table")?;

        advertiser_from_row(&row).context("Failed to read inserted advertiser")
    }

    /// 이름으로 광고주 조회
    /// Get advertiser by name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Advertiser>> {
        let row = sqlx::query(
            r#"
            SELECT advertiser_id, name, budget
            FROM advertisers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to select from advertisers table")?;

        let row = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        Ok(Some(advertiser_from_row(&row).context("Failed to read advertiser row")?))
    }

    /// 이름 존재 여부 (행 없음 → false)
    pub async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let row = sqlx::query("SELECT EXISTS (SELECT 1 FROM advertisers WHERE name = $1) AS found")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .context("Failed to check advertiser existence")?;

        Ok(row.try_get("found")?)
    }

    pub async fn get_budget(&self, advertiser_id: u64) -> Result<Option<f64>> {
        let row = sqlx::query("SELECT budget FROM advertisers WHERE advertiser_id = $1")
            .bind(advertiser_id as i64)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to select budget")?;

        match row {
            Some(r) => Ok(Some(r.try_get("budget")?)),
            None => Ok(None),
        }
    }

    /// 예산 덮어쓰기 (대상 행이 있었으면 true)
    pub async fn set_budget(&self, advertiser_id: u64, budget: f64) -> Result<bool> {
        let result = sqlx::query("UPDATE advertisers SET budget = $1 WHERE advertiser_id = $2")
            .bind(budget)
            .bind(advertiser_id as i64)
            .execute(&self.pool)
            .await
            .context("Failed to update budget")?;

        Ok(result.rows_affected() > 0)
    }

    /// 예산 증감 (하나의 트랜잭션)
    /// Adjust budget inside one transaction
    ///
    /// SELECT ... FOR UPDATE 로 행 잠금 → 같은 광고주에 대한 동시 증감은 직렬화됨
    /// 광고주가 없으면 Ok(None)
    ///
    /// `deadline` 은 잠금 대기와 UPDATE 까지만 제한함. 시간 초과 시 트랜잭션은
    /// 커밋 전에 drop 되어 롤백되고, 에러는 `tokio::time::error::Elapsed` 를 담음.
    /// COMMIT 은 제한하지 않음 (커밋된 변경이 실패로 보고되지 않도록)
    pub async fn adjust_budget(
        &self,
        advertiser_id: u64,
        delta: f64,
        deadline: Duration,
    ) -> Result<Option<f64>> {
        let mut tx = self.pool.begin().await.context("Failed to begin transaction")?;

        let staged = tokio::time::timeout(deadline, async {
            let row =
                sqlx::query("SELECT budget FROM advertisers WHERE advertiser_id = $1 FOR UPDATE")
                    .bind(advertiser_id as i64)
                    .fetch_optional(&mut *tx)
                    .await
                    .context("Failed to get old budget")?;

            let current: f64 = match row {
                Some(r) => r.try_get("budget")?,
                None => return Ok(None),
            };
            let new_budget = current + delta;

            sqlx::query("UPDATE advertisers SET budget = $1 WHERE advertiser_id = $2")
                .bind(new_budget)
                .bind(advertiser_id as i64)
                .execute(&mut *tx)
                .await
                .context("Failed to update budget")?;

            Ok::<_, anyhow::Error>(Some(new_budget))
        })
        .await
        .context("Budget update timed out before commit")??;

        let new_budget = match staged {
            Some(budget) => budget,
            None => return Ok(None),
        };

        tx.commit().await.context("Failed to commit budget update")?;

        Ok(Some(new_budget))
    }
}
