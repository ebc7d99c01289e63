use super::{
    should_warn_before_unload, show_status, EditorState, LEAVE_WARNING, OUTLINE_QUIET_MS,
    RENAME_QUIET_MS,
};
use crate::api::{ApiClient, EditorBackend, EditorConfig};
use crate::models::{EditorBootstrap, Severity};
use crate::outline::build_outline;
use crate::util::{is_mac_platform, is_save_shortcut, Debouncer};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use std::sync::Arc;

/// Page-wide controller for the editor: saving, renames, status line,
/// outline refresh and the window listeners that drive them.
///
/// Cheap to clone; all clones share the same signals and timers.
#[derive(Clone)]
pub(crate) struct EditorController {
    pub(super) state: EditorState,
    pub(super) api: Arc<dyn EditorBackend + Send + Sync>,
    pub(super) config: EditorConfig,

    /// Each rename field debounces independently.
    pub(super) title_debounce: Debouncer,
    pub(super) category_debounce: Debouncer,
    outline_debounce: Debouncer,

    /// Global listeners (keep handles alive).
    _keydown_handle: StoredValue<Option<WindowListenerHandle>>,
    _beforeunload_handle: StoredValue<Option<WindowListenerHandle>>,
}

impl EditorController {
    pub fn new(config: EditorConfig, bootstrap: EditorBootstrap) -> Self {
        let api = Arc::new(ApiClient::from_config(&config));
        Self::with_backend(config, bootstrap, api)
    }

    pub(super) fn with_backend(
        config: EditorConfig,
        bootstrap: EditorBootstrap,
        api: Arc<dyn EditorBackend + Send + Sync>,
    ) -> Self {
        let s = Self {
            state: EditorState::new(bootstrap),
            api,
            config,
            title_debounce: Debouncer::new(RENAME_QUIET_MS),
            category_debounce: Debouncer::new(RENAME_QUIET_MS),
            outline_debounce: Debouncer::new(OUTLINE_QUIET_MS),
            _keydown_handle: StoredValue::new(None),
            _beforeunload_handle: StoredValue::new(None),
        };

        s.start_global_listeners();
        s
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn show_message(&self, text: &str, severity: Severity) {
        show_status(self.state.status, text, severity);
    }

    /// Called by the textarea on each input.
    pub fn on_content_input(&self, value: String) {
        self.state.content.set(value);

        let state = self.state;
        self.outline_debounce.schedule(move || {
            let Some(doc) = state.content.try_get_untracked() else {
                return;
            };
            let _ = state.outline.try_set(build_outline(&doc));
        });
    }

    fn start_global_listeners(&self) {
        // Cmd/Ctrl+S -> save
        let s2 = self.clone();
        let is_mac = is_mac_platform();
        let keydown = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
            if !is_save_shortcut(&ev.key(), ev.meta_key(), ev.ctrl_key(), is_mac) {
                return;
            }
            ev.prevent_default();

            let s3 = s2.clone();
            spawn_local(async move {
                let _ = s3.save().await;
            });
        });
        self._keydown_handle.set_value(Some(keydown));

        // beforeunload -> native "leave site?" prompt
        let form_submitting = self.state.form_submitting;
        let beforeunload =
            window_event_listener(ev::beforeunload, move |ev: web_sys::BeforeUnloadEvent| {
                let submitting = form_submitting.try_get_untracked().unwrap_or(false);
                if !should_warn_before_unload(submitting) {
                    return;
                }
                ev.prevent_default();
                ev.set_return_value(LEAVE_WARNING);
            });
        self._beforeunload_handle.set_value(Some(beforeunload));
    }
}
