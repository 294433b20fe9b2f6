use super::label::{DiseaseLabel, ResultVariant};
use serde::{Deserialize, Serialize};

/// Путь эндпоинта предсказания относительно базового URL сервиса
pub const PREDICT_PATH: &str = "/predict";

/// Имя поля multipart-формы с изображением
pub const UPLOAD_FIELD: &str = "file";

/// Ответ `/predict` (200 OK)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease_name: String,
    /// Percentage, 0..=100
    pub confidence: f64,
    pub sinhala_advice: String,
    pub english_advice: String,
    pub organic_remedy: String,
    pub chemical_remedy: String,
}

impl PredictionResult {
    pub fn label(&self) -> DiseaseLabel {
        DiseaseLabel::from_code(&self.disease_name)
    }

    pub fn variant(&self) -> ResultVariant {
        self.label().variant()
    }
}

/// Тело ошибки сервиса (400 - нет файла, 500 - ошибка обработки)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEALTHY_BODY: &str = r#"{
        "disease_name": "healthy",
        "confidence": 97,
        "sinhala_advice": "ශාකය නිරෝගීයි.",
        "english_advice": "Plant is healthy. Keep good maintenance.",
        "organic_remedy": "Compost",
        "chemical_remedy": "NPK"
    }"#;

    #[test]
    fn test_parse_healthy_response() {
        let result: PredictionResult = serde_json::from_str(HEALTHY_BODY).unwrap();
        assert_eq!(result.disease_name, "healthy");
        assert_eq!(result.confidence, 97.0);
        assert_eq!(result.variant(), ResultVariant::Healthy);
    }

    #[test]
    fn test_parse_disease_response() {
        let body = HEALTHY_BODY.replace("\"healthy\"", "\"blister_blight\"");
        let result: PredictionResult = serde_json::from_str(&body).unwrap();
        assert_eq!(result.label(), DiseaseLabel::BlisterBlight);
        assert_eq!(result.variant(), ResultVariant::Disease);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let body = r#"{"disease_name": "healthy", "confidence": 97}"#;
        assert!(serde_json::from_str::<PredictionResult>(body).is_err());
    }

    #[test]
    fn test_parse_error_response() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error": "No file uploaded"}"#).unwrap();
        assert_eq!(err.error, "No file uploaded");
    }
}
