mod controller;
mod rename;
mod save;
mod status;

pub(crate) use controller::EditorController;
pub(crate) use status::show_status;

use crate::models::{EditorBootstrap, StatusMessage};
use crate::outline::{build_outline, OutlineEntry};
use leptos::prelude::*;
use rename::RenameTracker;

/// Minimum time between "return to page" and leaving the editor.
pub(crate) const SAVE_MIN_DELAY_MS: i32 = 200;
/// Quiet period after the last keystroke in the title or category field.
pub(crate) const RENAME_QUIET_MS: i32 = 500;
/// How long a status message stays visible.
pub(crate) const STATUS_DISPLAY_MS: i32 = 1000;
/// Typing pause before the outline is recomputed.
pub(crate) const OUTLINE_QUIET_MS: i32 = 1000;

pub(crate) const LEAVE_WARNING: &str = "It looks like you have been editing something. \
If you leave before saving, your changes will be lost.";

#[derive(Clone, Copy)]
pub(crate) struct EditorState {
    /// Current textarea content.
    pub content: RwSignal<String>,

    /// Last identifiers the server accepted.
    pub page: RwSignal<String>,
    pub category: RwSignal<String>,

    /// What the rename fields currently show (may be ahead of the server).
    pub title_input: RwSignal<String>,
    pub category_input: RwSignal<String>,

    /// One rename request per field at a time.
    pub title_rename: RwSignal<RenameTracker>,
    pub category_rename: RwSignal<RenameTracker>,

    pub status: RwSignal<StatusMessage>,

    /// Set before an intentional navigation so the unload guard stays quiet.
    pub form_submitting: RwSignal<bool>,

    pub saves_in_flight: RwSignal<u32>,

    pub outline: RwSignal<Vec<OutlineEntry>>,
}

impl EditorState {
    pub fn new(bootstrap: EditorBootstrap) -> Self {
        let outline = build_outline(&bootstrap.content);
        Self {
            content: RwSignal::new(bootstrap.content),
            title_input: RwSignal::new(bootstrap.page.clone()),
            page: RwSignal::new(bootstrap.page),
            category_input: RwSignal::new(bootstrap.category.clone()),
            category: RwSignal::new(bootstrap.category),
            title_rename: RwSignal::new(RenameTracker::default()),
            category_rename: RwSignal::new(RenameTracker::default()),
            status: RwSignal::new(StatusMessage::default()),
            form_submitting: RwSignal::new(false),
            saves_in_flight: RwSignal::new(0),
            outline: RwSignal::new(outline),
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saves_in_flight.get() > 0
    }
}

/// The unload prompt is wanted unless an intentional submit is under way.
pub(crate) fn should_warn_before_unload(form_submitting: bool) -> bool {
    !form_submitting
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unload_guard_follows_submit_flag() {
        assert!(should_warn_before_unload(false));
        assert!(!should_warn_before_unload(true));
    }

    #[test]
    fn test_editor_state_from_bootstrap() {
        let owner = Owner::new();
        owner.set();

        let state = EditorState::new(EditorBootstrap {
            page: "Rules".to_string(),
            category: "Games".to_string(),
            content: "# Rules\nbody".to_string(),
        });

        assert_eq!(state.page.get_untracked(), "Rules");
        assert_eq!(state.title_input.get_untracked(), "Rules");
        assert_eq!(state.category_input.get_untracked(), "Games");
        assert!(!state.form_submitting.get_untracked());
        assert_eq!(state.outline.get_untracked().len(), 1);
    }
}
