use anyhow::{Context, Result};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domains::ad::models::{Ad, NewAd};

pub struct AdRepository {
    pool: PgPool,
}

// NULL 값 처리: bid / ad_score → 0, image_url → ""
fn ad_from_row(row: &PgRow) -> Result<Ad, sqlx::Error> {
    Ok(Ad {
        id: row.try_get::<i64, _>("ad_id")? as u64,
        bid: row.try_get::<Option<f64>, _>("bid")?.unwrap_or(0.0),
        image_url: row.try_get::<Option<String>, _>("image_url")?.unwrap_or_default(),
        advertiser_id: row.try_get::<i64, _>("advertiser_id")? as u64,
        score: row.try_get::<Option<f64>, _>("ad_score")?.unwrap_or(0.0),
    })
}

fn ads_from_rows(rows: Vec<PgRow>) -> Result<Vec<Ad>> {
    rows.iter()
        .map(|row| ad_from_row(row).context("Failed to convert database row into Ad"))
        .collect()
}

impl AdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 광고 생성
    /// Create ad (FK 위반 시 sqlx Database 에러)
    pub async fn create(&self, ad: &NewAd) -> Result<Ad> {
        let row = sqlx::query(
            r#"
            INSERT INTO ads (bid, image_url, advertiser_id, ad_score)
            VALUES ($1, $2, $3, $4)
            RETURNING ad_id, bid, image_url, advertiser_id, ad_score
            "#,
        )
        .bind(ad.bid)
        .bind(&ad.image_url)
        .bind(ad.advertiser_id as i64)
        .bind(ad.score)
        .fetch_one(&self.pool)
        .await
        .context("Failed to add into ads table")?;

        ad_from_row(&row).context("Failed to read inserted ad")
    }

    /// 모든 광고 조회 (경매용, ID 오름차순)
    /// Get all ads ordered by id
    pub async fn get_all(&self) -> Result<Vec<Ad>> {
        let rows = sqlx::query(
            r#"
            SELECT ad_id, bid, image_url, advertiser_id, ad_score
            FROM ads
            ORDER BY ad_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to select all the ads")?;

        ads_from_rows(rows)
    }

    /// 광고주 ID로 광고 조회
    pub async fn get_by_advertiser(&self, advertiser_id: u64) -> Result<Vec<Ad>> {
        let rows = sqlx::query(
            r#"
            SELECT ad_id, bid, image_url, advertiser_id, ad_score
            FROM ads
            WHERE advertiser_id = $1
            ORDER BY ad_id ASC
            "#,
        )
        .bind(advertiser_id as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to select ads by advertiser_id")?;

        ads_from_rows(rows)
    }

    /// 광고 삭제 (삭제된 행이 있으면 true)
    pub async fn delete(&self, ad_id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM ads WHERE ad_id = $1")
            .bind(ad_id as i64)
            .execute(&self.pool)
            .await
            .context("Failed to delete ad")?;

        Ok(result.rows_affected() > 0)
    }
}
