use super::{EditorController, SAVE_MIN_DELAY_MS};
use crate::api::{ApiError, ApiResult};
use crate::backup::download_backup;
use crate::models::Severity;
use crate::util::{now_ms, page_view_url};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

pub(crate) const SAVED_TEXT: &str = "Saved";
pub(crate) const SAVE_FAILED_TEXT: &str = "Failed to Save, Downloading Backup";
pub(crate) const RETURN_FAILED_TEXT: &str = "There was an error returning to the page.";

#[derive(Clone, Debug)]
pub(crate) enum SaveOutcome {
    Saved,
    Failed(ApiError),
}

impl SaveOutcome {
    pub fn from_result(result: ApiResult<()>) -> Self {
        match result {
            Ok(()) => Self::Saved,
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }

    /// Any failure, transport or server, falls back to a local download.
    pub fn needs_backup(&self) -> bool {
        !self.is_saved()
    }

    pub fn status(&self) -> (&'static str, Severity) {
        match self {
            Self::Saved => (SAVED_TEXT, Severity::Success),
            Self::Failed(_) => (SAVE_FAILED_TEXT, Severity::Danger),
        }
    }
}

pub(crate) fn should_navigate(outcome: &SaveOutcome, navigate_on_failed_save: bool) -> bool {
    outcome.is_saved() || navigate_on_failed_save
}

impl EditorController {
    /// Send the document to the server. Never fails: a rejected or
    /// unreachable save ends in a backup download and a status message.
    pub async fn save(&self) -> SaveOutcome {
        let page = self.state.page.get_untracked();
        let content = self.state.content.get_untracked();

        self.state.saves_in_flight.update(|n| *n += 1);
        let result = self.api.save_file(&page, &content).await;
        let _ = self.state.saves_in_flight.try_update(|n| *n = n.saturating_sub(1));

        let outcome = SaveOutcome::from_result(result);
        match &outcome {
            SaveOutcome::Saved => log::info!("Saved page {page}"),
            SaveOutcome::Failed(e) => log::error!("Saving page {page} failed: {e}"),
        }

        if outcome.needs_backup() {
            let page = self.state.page.get_untracked();
            let content = self.state.content.get_untracked();
            if let Err(e) = download_backup(&page, &content) {
                log::error!("Backup download for page {page} failed: {e:?}");
            }
        }

        let (text, severity) = outcome.status();
        self.show_message(text, severity);
        outcome
    }

    /// Save, then leave for the page view once the outcome is known and at
    /// least `SAVE_MIN_DELAY_MS` has passed.
    pub async fn return_to_page(&self) {
        self.return_to_page_with(|url| {
            web_sys::window()
                .ok_or_else(|| JsValue::from_str("no window"))?
                .location()
                .set_href(url)
        })
        .await
    }

    /// `return_to_page` with the final navigation step supplied by the caller.
    pub(super) async fn return_to_page_with(
        &self,
        navigate: impl FnOnce(&str) -> Result<(), JsValue>,
    ) {
        let started = now_ms();
        self.state.form_submitting.set(true);

        let outcome = self.save().await;

        let remaining = i64::from(SAVE_MIN_DELAY_MS) - (now_ms() - started);
        if remaining > 0 {
            TimeoutFuture::new(remaining as u32).await;
        }

        if !should_navigate(&outcome, self.config.navigate_on_failed_save) {
            self.abort_return("save failed and navigation after failed saves is disabled");
            return;
        }

        let url = page_view_url(&self.state.page.get_untracked());
        if let Err(e) = navigate(&url) {
            self.abort_return(&format!("{e:?}"));
        }
    }

    fn abort_return(&self, reason: &str) {
        log::error!("Returning to page failed: {reason}");
        self.state.form_submitting.set(false);
        self.show_message(RETURN_FAILED_TEXT, Severity::Danger);
    }
}
