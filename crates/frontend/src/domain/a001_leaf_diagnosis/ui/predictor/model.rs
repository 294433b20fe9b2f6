//! Leaf Predictor - Model (API functions)

use super::error::PredictError;
use contracts::domain::a001_leaf_diagnosis::{ErrorResponse, PredictionResult, UPLOAD_FIELD};
use web_sys::{AbortController, AbortSignal};

/// Owns the abort controller of one `/predict` request.
///
/// Dropping the guard aborts the request; aborting a request that has
/// already settled does nothing.
pub struct RequestGuard {
    controller: AbortController,
}

impl RequestGuard {
    pub fn new() -> Result<Self, PredictError> {
        let controller = AbortController::new().map_err(|e| PredictError::Request(format!("{e:?}")))?;
        Ok(Self { controller })
    }

    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    /// Abort the request once `timeout_ms` elapses
    pub fn arm_timeout(&self, timeout_ms: u32) {
        let controller = self.controller.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            if !controller.signal().aborted() {
                controller.abort();
            }
        });
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        self.controller.abort();
    }
}

/// Отправить изображение на распознавание
pub async fn post_image(
    url: &str,
    file: &web_sys::File,
    signal: &AbortSignal,
) -> Result<PredictionResult, PredictError> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let request_err = |e: wasm_bindgen::JsValue| PredictError::Request(format!("{e:?}"));

    let form_data = FormData::new().map_err(request_err)?;
    form_data
        .append_with_blob(UPLOAD_FIELD, file)
        .map_err(request_err)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);
    opts.set_signal(Some(signal));

    let request = Request::new_with_str_and_init(url, &opts).map_err(request_err)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(request_err)?;

    let window = web_sys::window().ok_or_else(|| PredictError::Request("no window".to_string()))?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network_error(e, signal))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| PredictError::Decode(format!("{e:?}")))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(request_err)?)
        .await
        .map_err(|e| network_error(e, signal))?;
    let text: String = text
        .as_string()
        .ok_or_else(|| PredictError::Decode("bad text".to_string()))?;

    decode_response(resp.status(), &text)
}

/// The signal is only aborted by the timeout while the result still matters;
/// a supersede/teardown abort produces a stale response nobody reads.
fn network_error(e: wasm_bindgen::JsValue, signal: &AbortSignal) -> PredictError {
    if signal.aborted() {
        PredictError::TimedOut
    } else {
        PredictError::Network(format!("{e:?}"))
    }
}

/// Разобрать ответ сервиса
pub fn decode_response(status: u16, body: &str) -> Result<PredictionResult, PredictError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error);
        return Err(PredictError::Status { status, detail });
    }

    serde_json::from_str::<PredictionResult>(body).map_err(|e| PredictError::Decode(format!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str = r#"{
        "disease_name": "gray_blight",
        "confidence": 84.27,
        "sinhala_advice": "කැබෙන්ඩාසින් භාවිතා කරන්න.",
        "english_advice": "Use Carbendazim or Hexaconazole.",
        "organic_remedy": "Garlic + Neem",
        "chemical_remedy": "Carbendazim"
    }"#;

    #[test]
    fn test_decode_success() {
        let result = decode_response(200, OK_BODY).unwrap();
        assert_eq!(result.disease_name, "gray_blight");
        assert_eq!(result.confidence, 84.27);
        assert_eq!(result.chemical_remedy, "Carbendazim");
    }

    #[test]
    fn test_decode_backend_error_body() {
        let err = decode_response(400, r#"{"error": "No file uploaded"}"#).unwrap_err();
        assert_eq!(
            err,
            PredictError::Status {
                status: 400,
                detail: Some("No file uploaded".to_string())
            }
        );
    }

    #[test]
    fn test_decode_non_json_error_page() {
        let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            PredictError::Status {
                status: 502,
                detail: None
            }
        );
    }

    #[test]
    fn test_decode_malformed_success_body() {
        assert!(matches!(
            decode_response(200, "not json"),
            Err(PredictError::Decode(_))
        ));
        // A 200 carrying an error object is still malformed
        assert!(matches!(
            decode_response(200, r#"{"error": "boom"}"#),
            Err(PredictError::Decode(_))
        ));
    }
}
