//! Leaf Predictor - View Component

use super::result_panel::DiagnosisCard;
use super::view_model::LeafPredictorVm;
use crate::shared::api_utils::PredictorConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn LeafPredictor() -> impl IntoView {
    let vm = LeafPredictorVm::new(PredictorConfig::from_page());
    let screen = Memo::new(move |_| vm.screen());

    // Revoke the preview and abort a pending request when the view goes away
    on_cleanup(move || vm.teardown());

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.select_file(file);
        }
    };

    view! {
        <div class="predictor-card">
            // Upload area
            <div class="upload-area">
                <input
                    type="file"
                    accept="image/*"
                    class="upload-area__input"
                    on:change=on_file_change
                />
                {move || match screen.get().preview {
                    Some(preview) => view! {
                        <img src=preview.url alt="Preview" class="upload-area__preview" />
                        <span class="upload-area__file-name">{preview.file_name}</span>
                    }
                        .into_any(),
                    None => view! {
                        <div class="upload-area__prompt">
                            {icon("image-upload")}
                            <p>"Click to upload an image"</p>
                        </div>
                    }
                        .into_any(),
                }}
            </div>

            // Analyze button
            {move || {
                screen
                    .get()
                    .action
                    .map(|action| {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                class="predictor__action"
                                disabled=action.disabled
                                on_click=move |_| vm.submit()
                            >
                                {action.label}
                            </Button>
                        }
                    })
            }}

            // Result
            {move || {
                screen
                    .get()
                    .diagnosis
                    .map(|panel| view! { <DiagnosisCard panel=panel /> })
            }}
        </div>
    }
}
