// Ad domain models
pub mod ad;

pub use ad::*;
