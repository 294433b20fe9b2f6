//! Leaf Predictor UI Module (MVVM Standard)
//!
//! Structure:
//! - error.rs: PredictError, the single submission failure type
//! - preview.rs: PreviewHandle, RAII owner of a local object URL
//! - state.rs: PredictorState, the state container and its transitions
//! - model.rs: request guard and the `/predict` API call
//! - view_model.rs: LeafPredictorVm wiring the state into a signal
//! - view.rs: Main component LeafPredictor
//! - result_panel.rs: Component for the diagnosis panel

mod error;
mod model;
mod preview;
mod result_panel;
mod state;
mod view;
mod view_model;

pub use error::PredictError;
pub use preview::PreviewHandle;
pub use result_panel::DiagnosisCard;
pub use state::{
    accepts_file, ActionControl, DiagnosisPanel, PredictorScreen, PredictorState, PreviewView,
    Settled, Submission, SubmissionStatus, UploadFile,
};
pub use view::LeafPredictor;
pub use view_model::LeafPredictorVm;
