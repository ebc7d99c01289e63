use serde::{Deserialize, Serialize};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub(crate) enum Severity {
    #[default]
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn color(self) -> &'static str {
        match self {
            Severity::Danger => "#dc3545",
            Severity::Warning => "#ffc107",
            Severity::Success => "#28a745",
        }
    }
}

/// The transient status line under the editor toolbar.
///
/// Every `show` bumps `generation`; a scheduled fade only applies when it
/// still carries the current generation, so a newer message restarts the
/// display window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    pub visible: bool,
    pub generation: u64,
}

impl StatusMessage {
    pub fn show(&mut self, text: &str, severity: Severity) -> u64 {
        self.text = text.to_string();
        self.severity = severity;
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Returns whether the fade was applied.
    pub fn fade(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn opacity(&self) -> &'static str {
        if self.visible {
            "1"
        } else {
            "0"
        }
    }
}

/// Initial editor values rendered into the host page as `window.EDITOR`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EditorBootstrap {
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
}

impl EditorBootstrap {
    pub fn from_window() -> Self {
        let Some(obj) = web_sys::window().and_then(|w| w.get("EDITOR")) else {
            return Self::default();
        };
        if obj.is_undefined() || !obj.is_object() {
            return Self::default();
        }

        let get = |key: &str| {
            js_sys::Reflect::get(&obj, &key.into())
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default()
        };

        Self {
            page: get("page"),
            category: get("category"),
            content: get("content"),
        }
    }

    /// Falls back to the `page` query parameter when the host page did not
    /// name the page.
    pub fn with_page_fallback(mut self, query_page: Option<String>) -> Self {
        if self.page.trim().is_empty() {
            if let Some(p) = query_page {
                self.page = p;
            }
        }
        self
    }
}
