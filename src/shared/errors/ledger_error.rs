use std::time::Duration;
use thiserror::Error;

/// Ledger 저장소 에러
/// Errors surfaced by a `LedgerStore` implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// 광고주를 찾을 수 없음
    /// Advertiser not found
    #[error("Advertiser not found: id={id}")]
    AdvertiserNotFound { id: u64 },

    /// 광고주를 찾을 수 없음 (이름으로)
    /// Advertiser not found by name
    #[error("Advertiser not found: name={name}")]
    AdvertiserNotFoundByName { name: String },

    /// 같은 이름의 광고주가 이미 존재함
    /// Advertiser name already taken
    #[error("Advertiser already exists: {name}")]
    DuplicateName { name: String },

    /// 스토어 호출 타임아웃
    /// Store call did not complete in time
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),

    /// 데이터베이스 에러
    /// Connectivity or query failure
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl LedgerError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::AdvertiserNotFound { .. } | LedgerError::AdvertiserNotFoundByName { .. }
        )
    }
}
