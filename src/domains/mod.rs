// Domain modules
pub mod ad;
pub mod advertiser;
pub mod auction;
