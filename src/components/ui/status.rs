use crate::models::StatusMessage;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Fading one-line status text. Color and opacity follow the message.
#[component]
pub(crate) fn StatusLine(
    #[prop(into)] status: Signal<StatusMessage>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "min-h-5 text-sm font-medium transition-opacity duration-500",
        class
    );

    view! {
        <div
            data-name="StatusLine"
            role="status"
            aria-live="polite"
            class=merged_class
            data-severity=move || status.with(|s| s.severity.as_ref().to_string())
            style:color=move || status.with(|s| s.severity.color())
            style:opacity=move || status.with(|s| s.opacity())
        >
            {move || status.with(|s| s.text.clone())}
        </div>
    }
}
