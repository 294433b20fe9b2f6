//! Leaf Predictor - State container
//!
//! All transitions of the view live here so that the component itself only
//! wires browser events to them. The container is generic over the file type
//! `F` and the request guard `G`, which the browser build fills in with
//! `web_sys::File` and `RequestGuard`.
//!
//! ```text
//!            select                 submit
//!  (empty) ---------> Selected/Idle --------> Selected/InFlight
//!                        ^   ^                   |   |
//!                        |   +---- settle -------+   |
//!                        +-------- select -----------+  (request aborted)
//! ```

use super::error::PredictError;
use super::preview::PreviewHandle;
use contracts::domain::a001_leaf_diagnosis::{PredictionResult, ResultVariant};

/// Метаданные выбранного пользователем файла
pub trait UploadFile: Clone + 'static {
    fn name(&self) -> String;
    fn mime_type(&self) -> String;
}

impl UploadFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn mime_type(&self) -> String {
        self.type_()
    }
}

/// Только изображения
pub fn accepts_file<F: UploadFile>(file: &F) -> bool {
    file.mime_type().to_ascii_lowercase().starts_with("image/")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    InFlight,
}

/// A request the caller must now perform
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub ticket: u64,
    pub file: F,
}

/// Outcome of handing a response back to the state
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Applied,
    Failed(PredictError),
    /// The request was superseded or the view torn down; nothing changed
    Stale,
}

struct Selection<F> {
    file: F,
    preview: PreviewHandle,
}

struct InFlight<G> {
    ticket: u64,
    _guard: G,
}

pub struct PredictorState<F, G> {
    selection: Option<Selection<F>>,
    result: Option<PredictionResult>,
    in_flight: Option<InFlight<G>>,
    generation: u64,
}

impl<F: UploadFile, G> Default for PredictorState<F, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: UploadFile, G> PredictorState<F, G> {
    pub fn new() -> Self {
        Self {
            selection: None,
            result: None,
            in_flight: None,
            generation: 0,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.in_flight.is_some() {
            SubmissionStatus::InFlight
        } else {
            SubmissionStatus::Idle
        }
    }

    pub fn file(&self) -> Option<&F> {
        self.selection.as_ref().map(|s| &s.file)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview.url())
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Replace the selected file. The previous preview is released and a
    /// pending request is aborted by dropping its guard.
    pub fn select(&mut self, file: F, preview: PreviewHandle) {
        self.in_flight = None;
        self.result = None;
        self.selection = Some(Selection { file, preview });
    }

    /// Start a submission. `open` builds the request guard and is only
    /// called when there is a file to send and no request outstanding;
    /// otherwise the result is `Ok(None)`.
    pub fn begin_submit(
        &mut self,
        open: impl FnOnce() -> Result<G, PredictError>,
    ) -> Result<Option<Submission<F>>, PredictError> {
        if self.in_flight.is_some() {
            return Ok(None);
        }
        let Some(selection) = &self.selection else {
            return Ok(None);
        };
        let file = selection.file.clone();
        let guard = open()?;

        self.generation += 1;
        let ticket = self.generation;
        self.in_flight = Some(InFlight {
            ticket,
            _guard: guard,
        });
        Ok(Some(Submission { ticket, file }))
    }

    /// Apply the outcome of the request identified by `ticket`
    pub fn settle(
        &mut self,
        ticket: u64,
        outcome: Result<PredictionResult, PredictError>,
    ) -> Settled {
        match &self.in_flight {
            Some(pending) if pending.ticket == ticket => {}
            _ => return Settled::Stale,
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                Settled::Applied
            }
            Err(err) => {
                self.result = None;
                Settled::Failed(err)
            }
        }
    }

    /// Release everything the view owns
    pub fn teardown(&mut self) {
        self.in_flight = None;
        self.result = None;
        self.selection = None;
    }

    pub fn screen(&self) -> PredictorScreen {
        let Some(selection) = &self.selection else {
            return PredictorScreen::default();
        };

        let in_flight = self.in_flight.is_some();
        PredictorScreen {
            preview: Some(PreviewView {
                url: selection.preview.url().to_string(),
                file_name: selection.file.name(),
            }),
            action: Some(ActionControl {
                label: if in_flight {
                    ANALYZING_LABEL
                } else {
                    ANALYZE_LABEL
                },
                disabled: in_flight,
            }),
            diagnosis: self.result.as_ref().map(DiagnosisPanel::from_result),
        }
    }
}

pub const ANALYZE_LABEL: &str = "🔍 Analyze Leaf";
pub const ANALYZING_LABEL: &str = "Analyzing...";

/// Everything the view needs to draw itself. No preview means the upload
/// prompt is shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictorScreen {
    pub preview: Option<PreviewView>,
    pub action: Option<ActionControl>,
    pub diagnosis: Option<DiagnosisPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    pub url: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionControl {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisPanel {
    pub variant: ResultVariant,
    pub title: String,
    pub confidence: String,
    pub sinhala_advice: String,
    pub english_advice: String,
    pub organic_remedy: String,
    pub chemical_remedy: String,
}

impl DiagnosisPanel {
    pub fn from_result(result: &PredictionResult) -> Self {
        Self {
            variant: result.variant(),
            title: result.disease_name.clone(),
            confidence: format_confidence(result.confidence),
            sinhala_advice: result.sinhala_advice.clone(),
            english_advice: result.english_advice.clone(),
            organic_remedy: result.organic_remedy.clone(),
            chemical_remedy: result.chemical_remedy.clone(),
        }
    }
}

/// Число в том виде, как его печатает JSON: 97 -> "97", 95.5 -> "95.5"
pub fn format_confidence(value: f64) -> String {
    format!("{}", value)
}
