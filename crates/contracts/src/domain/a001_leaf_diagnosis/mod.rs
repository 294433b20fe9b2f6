//! Leaf diagnosis contracts
//!
//! - label.rs: disease labels known to the deployed model
//! - prediction.rs: `/predict` response DTOs

pub mod label;
pub mod prediction;

pub use label::{DiseaseLabel, ResultVariant, HEALTHY_LABEL};
pub use prediction::{ErrorResponse, PredictionResult, PREDICT_PATH, UPLOAD_FIELD};
