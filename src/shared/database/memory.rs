// =====================================================
// MemoryLedgerStore - 메모리 기반 원장
// =====================================================
// 역할: DB 없이 LedgerStore 를 구현 (테스트, LEDGER_BACKEND=memory)
//
// 핵심 설계:
// 1. 모든 상태를 하나의 Mutex 뒤에 둠
// 2. 읽기-계산-쓰기는 락을 잡은 한 구간 안에서 끝남 → 업데이트 유실 없음
// 3. BTreeMap 으로 ID 오름차순 (Postgres ORDER BY id 와 동일한 스캔 순서)
// =====================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domains::ad::models::{Ad, NewAd};
use crate::domains::advertiser::models::Advertiser;
use crate::shared::database::LedgerStore;
use crate::shared::errors::LedgerError;

#[derive(Debug)]
struct LedgerTables {
    advertisers: BTreeMap<u64, Advertiser>,
    ads: BTreeMap<u64, Ad>,
    next_advertiser_id: u64,
    next_ad_id: u64,
}

/// 메모리 기반 원장 저장소
#[derive(Debug)]
pub struct MemoryLedgerStore {
    tables: Mutex<LedgerTables>,
}

impl Default for MemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(LedgerTables {
                advertisers: BTreeMap::new(),
                ads: BTreeMap::new(),
                next_advertiser_id: 1,
                next_ad_id: 1,
            }),
        }
    }

    /// 광고주 수 (테스트 확인용)
    pub fn advertiser_count(&self) -> usize {
        self.tables.lock().advertisers.len()
    }

    /// 광고 수 (테스트 확인용)
    pub fn ad_count(&self) -> usize {
        self.tables.lock().ads.len()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn list_all_ads(&self) -> Result<Vec<Ad>, LedgerError> {
        Ok(self.tables.lock().ads.values().cloned().collect())
    }

    async fn insert_ad(&self, ad: NewAd) -> Result<u64, LedgerError> {
        let mut tables = self.tables.lock();

        // 외래키 제약 (ads.advertiser_id → advertisers.advertiser_id)
        if !tables.advertisers.contains_key(&ad.advertiser_id) {
            return Err(LedgerError::AdvertiserNotFound { id: ad.advertiser_id });
        }

        let id = tables.next_ad_id;
        tables.next_ad_id += 1;
        tables.ads.insert(id, ad.into_ad(id));
        Ok(id)
    }

    async fn delete_ad(&self, ad_id: u64) -> Result<bool, LedgerError> {
        Ok(self.tables.lock().ads.remove(&ad_id).is_some())
    }

    async fn find_ads_by_advertiser(&self, advertiser_id: u64) -> Result<Vec<Ad>, LedgerError> {
        Ok(self
            .tables
            .lock()
            .ads
            .values()
            .filter(|ad| ad.advertiser_id == advertiser_id)
            .cloned()
            .collect())
    }

    async fn insert_advertiser(&self, name: &str, budget: f64) -> Result<u64, LedgerError> {
        let mut tables = self.tables.lock();

        if tables.advertisers.values().any(|a| a.name == name) {
            return Err(LedgerError::DuplicateName { name: name.to_string() });
        }

        let id = tables.next_advertiser_id;
        tables.next_advertiser_id += 1;
        tables.advertisers.insert(
            id,
            Advertiser {
                id,
                name: name.to_string(),
                budget,
            },
        );
        Ok(id)
    }

    async fn advertiser_exists(&self, name: &str) -> Result<bool, LedgerError> {
        Ok(self.tables.lock().advertisers.values().any(|a| a.name == name))
    }

    async fn find_advertiser_by_name(&self, name: &str) -> Result<Advertiser, LedgerError> {
        self.tables
            .lock()
            .advertisers
            .values()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| LedgerError::AdvertiserNotFoundByName { name: name.to_string() })
    }

    async fn get_budget(&self, advertiser_id: u64) -> Result<f64, LedgerError> {
        self.tables
            .lock()
            .advertisers
            .get(&advertiser_id)
            .map(|a| a.budget)
            .ok_or(LedgerError::AdvertiserNotFound { id: advertiser_id })
    }

    async fn set_budget(&self, advertiser_id: u64, budget: f64) -> Result<(), LedgerError> {
        let mut tables = self.tables.lock();
        let advertiser = tables
            .advertisers
            .get_mut(&advertiser_id)
            .ok_or(LedgerError::AdvertiserNotFound { id: advertiser_id })?;
        advertiser.budget = budget;
        Ok(())
    }

    async fn adjust_budget(&self, advertiser_id: u64, delta: f64) -> Result<f64, LedgerError> {
        let mut tables = self.tables.lock();
        let advertiser = tables
            .advertisers
            .get_mut(&advertiser_id)
            .ok_or(LedgerError::AdvertiserNotFound { id: advertiser_id })?;
        advertiser.budget += delta;
        Ok(advertiser.budget)
    }
}
