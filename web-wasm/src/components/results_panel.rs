//! Results panel component
//!
//! Renders one of four views from the session: idle placeholder, analyzing
//! spinner, error prompt, or the completed analysis (which also hosts the
//! fix-it and download actions).

use leptos::prelude::*;
use resume_match_common::{AnalysisStatus, MatchResult, OptimizationResult, Session};

use crate::components::match_gauge::MatchGauge;

#[component]
pub fn ResultsPanel<FF, FD>(
    session: RwSignal<Session>,
    on_fix_it: FF,
    on_download: FD,
) -> impl IntoView
where
    FF: Fn(()) + 'static + Clone + Send,
    FD: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="results-panel">
            {move || {
                let on_fix_it = on_fix_it.clone();
                let on_download = on_download.clone();
                let status = session.with(|s| s.status);
                match status {
                    AnalysisStatus::Idle => idle_view().into_any(),
                    AnalysisStatus::Analyzing => analyzing_view().into_any(),
                    AnalysisStatus::Error => error_view().into_any(),
                    AnalysisStatus::Complete | AnalysisStatus::Optimizing => {
                        let result = session.with(|s| s.result.clone());
                        let optimization = session.with(|s| s.optimization.clone());
                        match result {
                            Some(result) => view! {
                                <CompletedView
                                    result=result
                                    optimization=optimization
                                    optimizing={status == AnalysisStatus::Optimizing}
                                    on_fix_it=on_fix_it
                                    on_download=on_download
                                />
                            }
                            .into_any(),
                            None => idle_view().into_any(),
                        }
                    }
                }
            }}
        </div>
    }
}

fn idle_view() -> impl IntoView {
    view! {
        <div class="panel-placeholder">
            <div class="placeholder-icon">"✨"</div>
            <h3>"Ready to Analyze"</h3>
            <p class="text-muted">
                "Upload your resume and the job description to see your match score and optimize gaps."
            </p>
        </div>
    }
}

fn analyzing_view() -> impl IntoView {
    view! {
        <div class="panel-placeholder">
            <div class="spinner"></div>
            <h3>"Analyzing compatibility..."</h3>
            <p class="text-muted">"Scanning keywords and experience"</p>
        </div>
    }
}

fn error_view() -> impl IntoView {
    view! {
        <div class="panel-placeholder error">
            <div class="placeholder-icon">"⚠"</div>
            <h3>"Analysis Failed"</h3>
            <p class="text-muted">"Please try uploading your documents again."</p>
        </div>
    }
}

#[component]
fn CompletedView<FF, FD>(
    result: MatchResult,
    optimization: Option<OptimizationResult>,
    optimizing: bool,
    on_fix_it: FF,
    on_download: FD,
) -> impl IntoView
where
    FF: Fn(()) + 'static + Clone + Send,
    FD: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="card match-summary">
            <MatchGauge score=result.score />
            <div class="summary-text">
                <h2>"Match Analysis"</h2>
                <p>{result.summary_analysis.clone()}</p>
            </div>
        </div>

        <div class="card gap-analysis">
            <h3>"Missing Keywords"</h3>
            {if result.missing_keywords.is_empty() {
                view! {
                    <p class="text-muted">"No critical keywords missing. Great job."</p>
                }
                .into_any()
            } else {
                view! {
                    <div class="keyword-chips">
                        {result
                            .missing_keywords
                            .iter()
                            .map(|keyword| {
                                view! { <span class="keyword-chip">{keyword.clone()}</span> }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            <div class="optimization-actions">
                <h4>"Optimization Actions"</h4>
                {match optimization {
                    None => view! {
                        <button
                            class="btn btn-primary"
                            disabled=optimizing
                            on:click=move |_| on_fix_it(())
                        >
                            {if optimizing {
                                "Optimizing Resume..."
                            } else {
                                "Fix It: Auto-Optimize Resume"
                            }}
                        </button>
                    }
                    .into_any(),
                    Some(optimization) => view! {
                        <div class="optimization-note">
                            <h5>"Optimization Complete"</h5>
                            <p>{optimization.changes_made.clone()}</p>
                        </div>
                        <button class="btn btn-secondary" on:click=move |_| on_download(())>
                            "Download Optimized .docx"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
