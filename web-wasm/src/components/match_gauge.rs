//! Score gauge component

use leptos::prelude::*;

/// Ring color by score threshold.
fn score_color(score: u8) -> &'static str {
    if score >= 80 {
        "#10B981" // green
    } else if score >= 50 {
        "#F59E0B" // amber
    } else {
        "#EF4444" // red
    }
}

#[component]
pub fn MatchGauge(score: u8) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * 54.0;
    let offset = circumference * (1.0 - f64::from(score) / 100.0);

    view! {
        <div class="match-gauge">
            <svg viewBox="0 0 120 120">
                <circle
                    class="gauge-track"
                    cx="60" cy="60" r="54"
                    fill="none"
                    stroke="#E5E7EB"
                    stroke-width="10"
                />
                <circle
                    class="gauge-value"
                    cx="60" cy="60" r="54"
                    fill="none"
                    stroke=score_color(score)
                    stroke-width="10"
                    stroke-linecap="round"
                    stroke-dasharray=format!("{:.2}", circumference)
                    stroke-dashoffset=format!("{:.2}", offset)
                    transform="rotate(-90 60 60)"
                />
            </svg>
            <div class="gauge-label">
                <span class="gauge-score">{format!("{}%", score)}</span>
                <span class="gauge-caption">"Match"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_thresholds() {
        assert_eq!(score_color(100), "#10B981");
        assert_eq!(score_color(80), "#10B981");
        assert_eq!(score_color(79), "#F59E0B");
        assert_eq!(score_color(50), "#F59E0B");
        assert_eq!(score_color(49), "#EF4444");
        assert_eq!(score_color(0), "#EF4444");
    }
}
