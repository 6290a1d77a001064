pub mod error;
mod prediction_service;

pub use error::PredictionError;
pub use prediction_service::{PredictionApi, PredictionConfig, PredictionService};

pub use reqwest::StatusCode;
