pub mod client;
pub mod models;

pub use client::AnalyticsClient;
pub use models::{ApiError, ListenerPoint};
