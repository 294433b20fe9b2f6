//! Leaf Predictor - View Model

use super::error::PredictError;
use super::model::{post_image, RequestGuard};
use super::preview::object_url_for;
use super::state::{accepts_file, PredictorScreen, PredictorState, Settled};
use crate::shared::api_utils::PredictorConfig;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

pub type WebPredictorState = PredictorState<web_sys::File, RequestGuard>;

/// Browser file handles and abort controllers are `!Send`, so the state
/// lives in a local-storage signal.
#[derive(Clone, Copy)]
pub struct LeafPredictorVm {
    pub state: RwSignal<WebPredictorState, LocalStorage>,
    pub config: StoredValue<PredictorConfig>,
}

impl LeafPredictorVm {
    pub fn new(config: PredictorConfig) -> Self {
        Self {
            state: RwSignal::new_local(WebPredictorState::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn screen(&self) -> PredictorScreen {
        self.state.with(|s| s.screen())
    }

    /// Выбор файла пользователем
    pub fn select_file(&self, file: web_sys::File) {
        if !accepts_file(&file) {
            log::warn!(
                "Ignoring {} ({}): not an image",
                file.name(),
                file.type_()
            );
            return;
        }

        let preview = match object_url_for(&file) {
            Ok(preview) => preview,
            Err(e) => {
                log::error!("Failed to create preview for {}: {}", file.name(), e);
                return;
            }
        };

        log::info!("Selected {} ({})", file.name(), file.type_());
        self.state.update(|s| s.select(file, preview));
    }

    /// Отправка выбранного файла на распознавание
    pub fn submit(&self) {
        let config = self.config.get_value();
        let mut signal = None;
        let begun = self.state.try_update(|s| {
            s.begin_submit(|| {
                let guard = RequestGuard::new()?;
                guard.arm_timeout(config.timeout_ms);
                signal = Some(guard.signal());
                Ok(guard)
            })
        });

        let (submission, signal) = match (begun, signal) {
            (Some(Ok(Some(submission))), Some(signal)) => (submission, signal),
            (Some(Err(err)), _) => {
                log::error!("Prediction failed: {}", err);
                notify_failure(&err);
                return;
            }
            _ => {
                log::debug!("Submit ignored: no file selected or request already in flight");
                return;
            }
        };

        let url = config.predict_url();
        log::info!("Submitting {} to {}", submission.file.name(), url);

        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = post_image(&url, &submission.file, &signal).await;
            match state.try_update(|s| s.settle(submission.ticket, outcome)) {
                Some(Settled::Applied) => {
                    log::info!("Prediction #{} received", submission.ticket);
                }
                Some(Settled::Failed(err)) => {
                    log::error!("Prediction #{} failed: {}", submission.ticket, err);
                    notify_failure(&err);
                }
                Some(Settled::Stale) | None => {
                    log::debug!("Discarded stale response for prediction #{}", submission.ticket);
                }
            }
        });
    }

    /// Release the preview and abort a pending request
    pub fn teardown(&self) {
        self.state.try_update(|s| s.teardown());
    }
}

fn notify_failure(err: &PredictError) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(err.user_message()) {
            log::warn!("Failed to show alert: {:?}", e);
        }
    }
}
