//! Call-to-action card

use leptos::prelude::*;

/// "Need a Custom App?" card. The button is inert for now.
#[component]
pub fn CtaPanel() -> impl IntoView {
    view! {
        <div class="widget cta-widget">
            <div class="cta-icon">"🚀"</div>
            <h3 class="cta-title">"Need a Custom App?"</h3>
            <p class="cta-text">
                "Does your business need a specific tool tailored to your workflow?"
            </p>
            <button class="cta-button" type="button">"INQUIRE NOW"</button>
        </div>
    }
}
