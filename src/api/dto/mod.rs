//! Data Transfer Objects for API requests and responses.

pub mod geocode;
pub mod health;
pub mod summary;
