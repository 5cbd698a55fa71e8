// All repositories module
pub mod ad_repository;
pub mod advertiser_repository;

pub use ad_repository::*;
pub use advertiser_repository::*;
