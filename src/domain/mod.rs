pub mod analysis;
pub mod asset;
pub mod inspection;
pub mod user;
