//! Topic progress fragments, rendered to HTML strings through `dioxus-ssr`.

use dioxus::prelude::*;
use study_core::model::ProgressRecord;

use crate::vm::{ProgressCardVm, format_percentage};

/// Fill width follows the raw percentage; the label shows it rounded.
#[component]
pub fn ProgressBar(percentage: f64) -> Element {
    let label = format_percentage(percentage);

    rsx! {
        div { class: "progress-bar-container",
            div { class: "progress-bar-fill", style: "width: {percentage}%" }
            span { class: "progress-text", "{label}" }
        }
    }
}

#[component]
pub fn ProgressCard(card: ProgressCardVm) -> Element {
    let stats = [
        ("Completion", card.completion_label.clone()),
        ("Modules Completed", card.modules_completed.to_string()),
        ("Study Time", card.study_time_label.clone()),
        ("Average Score", card.average_score_label.clone()),
        ("Flashcards Reviewed", card.flashcards_reviewed.to_string()),
    ];

    rsx! {
        div { class: "progress-card",
            h3 { "Your Progress" }
            div { class: "progress-stats",
                for (label, value) in stats {
                    div { key: "{label}", class: "stat",
                        span { class: "stat-label", "{label}" }
                        span { class: "stat-value", "{value}" }
                    }
                }
            }
            ProgressBar { percentage: card.completion_percentage }
        }
    }
}

#[must_use]
pub fn render_progress_bar(percentage: f64) -> String {
    dioxus_ssr::render_element(rsx! {
        ProgressBar { percentage }
    })
}

/// Summary card with five statistics followed by the progress bar.
#[must_use]
pub fn render_progress_card(record: &ProgressRecord) -> String {
    let card = ProgressCardVm::from(record);
    dioxus_ssr::render_element(rsx! {
        ProgressCard { card }
    })
}
