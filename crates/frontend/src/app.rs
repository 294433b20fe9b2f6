use crate::domain::a001_leaf_diagnosis::ui::predictor::LeafPredictor;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="page">
                // Header
                <h1 class="page__title">"🌿 Tea Leaf Disease Predictor"</h1>
                <p class="page__subtitle">
                    "Upload a tea leaf image to detect diseases & get remedies."
                </p>

                <LeafPredictor />

                // Footer
                <p class="page__footer">"© 2026 Tea Research Project"</p>
            </main>
        </ConfigProvider>
    }
}
