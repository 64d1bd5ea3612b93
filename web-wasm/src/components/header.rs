//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Resume Match Dashboard"</h1>
            <p class="tagline">"Beat the ATS with AI-powered optimization"</p>
        </header>
    }
}
