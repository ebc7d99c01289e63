use super::EditorController;
use crate::api::{ApiErrorKind, ApiResult};
use crate::models::Severity;
use crate::util::{editor_url, replace_history};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameField {
    PageName,
    Category,
}

impl RenameField {
    pub fn success_text(self) -> &'static str {
        match self {
            Self::PageName => "Updated Title",
            Self::Category => "Updated Categories",
        }
    }

    pub fn failure_text(self, kind: ApiErrorKind) -> &'static str {
        match (self, kind) {
            (Self::PageName, ApiErrorKind::Http) => "Title Already Exists",
            _ => "Failed to Update",
        }
    }
}

/// Request bookkeeping for one rename field.
///
/// While a request is out, later renames only mark `rerun`; the field is
/// sent again after the first settles, against the then-current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RenameTracker {
    pub in_flight: bool,
    pub rerun: bool,
}

impl RenameTracker {
    /// `true` when the caller may send now.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            self.rerun = true;
            false
        } else {
            self.in_flight = true;
            true
        }
    }

    /// Marks the request settled; returns whether another send is owed.
    pub fn finish(&mut self) -> bool {
        self.in_flight = false;
        std::mem::take(&mut self.rerun)
    }
}

/// The trimmed value to send, or `None` when there is nothing to rename.
pub(crate) fn plan_rename(current: &str, typed: &str) -> Option<String> {
    let trimmed = typed.trim();
    if trimmed.is_empty() || trimmed == current {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl EditorController {
    pub fn on_title_input(&self, value: String) {
        self.state.title_input.set(value);
        let c = self.clone();
        self.title_debounce.schedule(move || c.rename(RenameField::PageName));
    }

    pub fn on_category_input(&self, value: String) {
        self.state.category_input.set(value);
        let c = self.clone();
        self.category_debounce.schedule(move || c.rename(RenameField::Category));
    }

    /// Rename right away, dropping any pending debounced call.
    pub fn update_page_name(&self) {
        self.title_debounce.cancel();
        self.rename(RenameField::PageName);
    }

    pub fn update_category_name(&self) {
        self.category_debounce.cancel();
        self.rename(RenameField::Category);
    }

    fn field_signals(
        &self,
        field: RenameField,
    ) -> (RwSignal<String>, RwSignal<String>, RwSignal<RenameTracker>) {
        match field {
            RenameField::PageName => (
                self.state.title_input,
                self.state.page,
                self.state.title_rename,
            ),
            RenameField::Category => (
                self.state.category_input,
                self.state.category,
                self.state.category_rename,
            ),
        }
    }

    fn rename(&self, field: RenameField) {
        let (input, committed, tracker) = self.field_signals(field);

        let typed = input.get_untracked();
        let Some(new_value) = plan_rename(&committed.get_untracked(), &typed) else {
            // Blank or unchanged: show the last accepted value again.
            input.set(committed.get_untracked());
            return;
        };
        if new_value != typed {
            input.set(new_value.clone());
        }

        if !tracker.try_update(|t| t.begin()).unwrap_or(false) {
            log::debug!("{field:?} rename queued behind the one in flight");
            return;
        }

        let page = self.state.page.get_untracked();
        let c = self.clone();
        spawn_local(async move {
            let result = match field {
                RenameField::PageName => c.api.update_page_name(&page, &new_value).await,
                RenameField::Category => c.api.update_page_category(&page, &new_value).await,
            };
            c.apply_rename(field, new_value, result);

            if tracker.try_update(|t| t.finish()).unwrap_or(false) {
                c.rename(field);
            }
        });
    }

    pub(super) fn apply_rename(
        &self,
        field: RenameField,
        new_value: String,
        result: ApiResult<()>,
    ) {
        let (input, committed, tracker) = self.field_signals(field);

        match result {
            Ok(()) => {
                log::info!("{field:?} updated to {new_value}");
                committed.set(new_value);

                let url = editor_url(&self.state.page.get_untracked());
                if let Err(e) = replace_history(&url) {
                    log::warn!("Failed to update history entry to {url}: {e:?}");
                }
                self.show_message(field.success_text(), Severity::Success);
            }
            Err(e) => {
                log::error!("{field:?} update to {new_value} failed: {e}");
                // A queued rename still wants what the user typed since.
                let queued = tracker.try_get_untracked().is_some_and(|t| t.rerun);
                if !queued {
                    input.set(committed.get_untracked());
                }
                self.show_message(field.failure_text(e.kind()), Severity::Danger);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_rename_trims() {
        assert_eq!(plan_rename("Old", "  Hello "), Some("Hello".to_string()));
    }

    #[test]
    fn test_plan_rename_skips_empty_and_unchanged() {
        assert_eq!(plan_rename("Old", "   "), None);
        assert_eq!(plan_rename("Old", ""), None);
        assert_eq!(plan_rename("Old", " Old "), None);
    }

    #[test]
    fn test_tracker_holds_second_rename_until_first_settles() {
        let mut tracker = RenameTracker::default();
        assert!(tracker.begin());
        assert!(!tracker.begin());
        assert!(!tracker.begin());
        assert!(tracker.in_flight);

        // Both queued calls collapse into one resend.
        assert!(tracker.finish());
        assert_eq!(tracker, RenameTracker::default());
        assert!(tracker.begin());
        assert!(!tracker.finish());
    }

    #[test]
    fn test_rename_messages() {
        assert_eq!(RenameField::PageName.success_text(), "Updated Title");
        assert_eq!(RenameField::Category.success_text(), "Updated Categories");
        assert_eq!(
            RenameField::PageName.failure_text(ApiErrorKind::Http),
            "Title Already Exists"
        );
        assert_eq!(
            RenameField::PageName.failure_text(ApiErrorKind::Network),
            "Failed to Update"
        );
        assert_eq!(
            RenameField::Category.failure_text(ApiErrorKind::Http),
            "Failed to Update"
        );
    }
}
