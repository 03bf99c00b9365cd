pub mod asset;
pub mod error;
pub mod github;
pub mod platform;
