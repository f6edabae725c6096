//! Application layer - typed API access and one service per endpoint family

pub mod api;
pub mod error;
pub mod services;

pub use error::ServiceError;
