//! Main application component

use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;
use resume_match_common::{AnalysisStatus, Session};
use wasm_bindgen_futures::spawn_local;

use crate::api::gemini::{analyze_match, optimize_resume};
use crate::components::{
    header::Header, results_panel::ResultsPanel, settings_panel::SettingsPanel,
    upload_slot::UploadSlot,
};
use crate::export::docx_wasm;

/// localStorage key for the persisted API key.
const API_KEY_STORAGE_KEY: &str = "resume-match.api-key";

/// A user-selected document, held as a FileReader data URL.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub file_name: String,
    pub data_url: String,
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Application state
    let (api_key, set_api_key) =
        signal(LocalStorage::get::<String>(API_KEY_STORAGE_KEY).unwrap_or_default());
    let (resume, set_resume) = signal(None::<UploadedDocument>);
    let (jd, set_jd) = signal(None::<UploadedDocument>);
    let session = RwSignal::new(Session::new());

    // API key persistence
    let on_save_api_key = move |_: ()| {
        if let Err(e) = LocalStorage::set(API_KEY_STORAGE_KEY, api_key.get_untracked()) {
            gloo::console::warn!(format!("Failed to store API key: {}", e));
        }
    };
    let on_clear_api_key = move |_: ()| {
        LocalStorage::delete(API_KEY_STORAGE_KEY);
        set_api_key.set(String::new());
    };

    // Check-match guard: both documents selected, an API key present, and no
    // call in flight.
    let can_analyze = move || {
        !api_key.get().is_empty()
            && session.with(|s| s.can_analyze(resume.get().is_some(), jd.get().is_some()))
    };

    // Check-match handler
    let on_check_match = move |_| {
        let (Some(resume_doc), Some(jd_doc)) = (resume.get_untracked(), jd.get_untracked())
        else {
            return;
        };
        let started = session
            .try_update(|s| s.begin_analysis(true, true))
            .unwrap_or(false);
        if !started {
            return;
        }

        let key = api_key.get_untracked();
        spawn_local(async move {
            match analyze_match(&key, &resume_doc, &jd_doc).await {
                Ok(result) => session.update(|s| s.complete_analysis(result)),
                Err(e) => {
                    gloo::console::error!(format!("Analysis failed: {:?}", e));
                    session.update(|s| s.fail_analysis());
                }
            }
        });
    };

    // Fix-it handler
    let on_fix_it = move |_: ()| {
        let Some(result) = session.with_untracked(|s| s.result.clone()) else {
            return;
        };
        let started = session
            .try_update(|s| s.begin_optimization())
            .unwrap_or(false);
        if !started {
            return;
        }

        let key = api_key.get_untracked();
        spawn_local(async move {
            match optimize_resume(&key, &result.extracted_resume_text, &result.missing_keywords)
                .await
            {
                Ok(optimization) => session.update(|s| s.complete_optimization(optimization)),
                Err(e) => {
                    // keep previous results so the user can simply retry
                    gloo::console::warn!(format!("Optimization failed: {:?}", e));
                    session.update(|s| s.fail_optimization());
                }
            }
        });
    };

    // Download handler
    let on_download = move |_: ()| {
        let Some(optimization) = session.with_untracked(|s| s.optimization.clone()) else {
            return;
        };
        spawn_local(async move {
            if let Err(e) = docx_wasm::export_docx(&optimization.optimized_text).await {
                gloo::console::error!(format!("Docx export failed: {}", e));
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
                on_save=on_save_api_key
                on_clear=on_clear_api_key
            />

            <main class="layout">
                <section class="inputs">
                    <h2>"Documents"</h2>

                    <UploadSlot
                        label="1. Upload Resume (PDF)"
                        document=resume
                        set_document=set_resume
                    />

                    <UploadSlot
                        label="2. Job Description (PDF)"
                        document=jd
                        set_document=set_jd
                    />

                    <button
                        class="btn btn-primary check-match"
                        disabled=move || !can_analyze()
                        on:click=on_check_match
                    >
                        {move || {
                            if session.with(|s| s.status) == AnalysisStatus::Analyzing {
                                "Analyzing..."
                            } else {
                                "Check Match"
                            }
                        }}
                    </button>
                </section>

                <section class="results">
                    <ResultsPanel session=session on_fix_it=on_fix_it on_download=on_download />
                </section>
            </main>
        </div>
    }
}
