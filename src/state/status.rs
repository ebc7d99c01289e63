use super::STATUS_DISPLAY_MS;
use crate::models::{Severity, StatusMessage};
use crate::util::defer;
use leptos::prelude::*;

/// Show `text` and fade it after the display window unless a newer message
/// has replaced it by then.
pub(crate) fn show_status(status: RwSignal<StatusMessage>, text: &str, severity: Severity) {
    let generation = status
        .try_update(|s| s.show(text, severity))
        .unwrap_or_default();

    defer(STATUS_DISPLAY_MS, move || {
        let _ = status.try_update(|s| s.fade(generation));
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_message_fades_after_display_window() {
        let owner = Owner::new();
        owner.set();
        let status = RwSignal::new(StatusMessage::default());

        show_status(status, "Saved", Severity::Success);
        assert_eq!(status.get_untracked().opacity(), "1");

        TimeoutFuture::new(900).await;
        assert!(status.get_untracked().visible);

        TimeoutFuture::new(200).await;
        assert_eq!(status.get_untracked().opacity(), "0");
    }

    #[wasm_bindgen_test]
    async fn test_newer_message_restarts_window() {
        let owner = Owner::new();
        owner.set();
        let status = RwSignal::new(StatusMessage::default());

        show_status(status, "Saved", Severity::Success);
        TimeoutFuture::new(600).await;
        show_status(status, "Failed to Update", Severity::Danger);

        TimeoutFuture::new(600).await;
        let s = status.get_untracked();
        assert!(s.visible);
        assert_eq!(s.text, "Failed to Update");
        assert_eq!(s.severity.color(), "#dc3545");

        TimeoutFuture::new(500).await;
        assert!(!status.get_untracked().visible);
    }
}
