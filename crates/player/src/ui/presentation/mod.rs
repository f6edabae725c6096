//! Presentation layer - Dioxus UI components and the flows behind them

pub mod components;
pub mod handlers;
pub mod services;
pub mod state;

pub use services::Services;
