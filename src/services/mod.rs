pub mod chart_service;
pub mod forecast_service;
pub mod series_service;
