//! Leaf Predictor - diagnosis panel

use super::state::DiagnosisPanel;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DiagnosisCard(panel: DiagnosisPanel) -> impl IntoView {
    let header_class = format!(
        "diagnosis__header diagnosis__header--{}",
        panel.variant.css_modifier()
    );

    view! {
        <div class="diagnosis">
            // Status header
            <div class=header_class>
                <h2 class="diagnosis__title">{panel.title}</h2>
                <p class="diagnosis__confidence">{format!("Confidence: {}%", panel.confidence)}</p>
            </div>

            // General advice
            <div class="diagnosis__section">
                <h3 class="diagnosis__section-title">"📋 Diagnosis & Advice"</h3>
                <div class="diagnosis__advice">
                    <p class="diagnosis__advice-local">{panel.sinhala_advice}</p>
                    <p class="diagnosis__advice-en">{panel.english_advice}</p>
                </div>
            </div>

            // Remedies
            <div class="diagnosis__remedies">
                <div class="remedy remedy--organic">
                    <h4 class="remedy__title">"🌱 Organic Remedy"</h4>
                    <p class="remedy__text">{panel.organic_remedy}</p>
                </div>
                <div class="remedy remedy--chemical">
                    <h4 class="remedy__title">"🧪 Chemical Solution"</h4>
                    <p class="remedy__text">{panel.chemical_remedy}</p>
                </div>
            </div>
        </div>
    }
}
