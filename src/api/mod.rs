use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub(crate) const SAVE_FILE_PATH: &str = "/save-file";
pub(crate) const UPDATE_PAGE_NAME_PATH: &str = "/update-page-name";
pub(crate) const UPDATE_PAGE_CATEGORY_PATH: &str = "/update-page-category";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
}

#[derive(Clone, Debug, thiserror::Error)]
pub(crate) enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("{context} ({status})")]
    Http { status: u16, context: String },
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    fn http(status: reqwest::StatusCode, ctx: &str) -> Self {
        Self::Http {
            status: status.as_u16(),
            context: ctx.to_string(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) => ApiErrorKind::Network,
            Self::Http { .. } => ApiErrorKind::Http,
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Runtime configuration injected by the host page as `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EditorConfig {
    pub api_url: String,

    /// Whether "return to page" still leaves the editor after a failed save.
    /// The backup download has already happened by then.
    pub navigate_on_failed_save: bool,
}

impl EditorConfig {
    pub fn new() -> Self {
        let mut config = Self {
            api_url: current_origin(),
            navigate_on_failed_save: true,
        };

        // Both `window.ENV.API_URL` and `window.ENV.api_url` are accepted.
        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return config;
        };
        if env.is_undefined() || !env.is_object() {
            return config;
        }

        if let Some(url) = env_string(&env, &["API_URL", "api_url"]) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(flag) = env_bool(&env, &["NAVIGATE_ON_FAILED_SAVE", "navigate_on_failed_save"])
        {
            config.navigate_on_failed_save = flag;
        }

        config
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn current_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

fn env_string(env: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| {
        js_sys::Reflect::get(env, &(*k).into())
            .ok()
            .and_then(|v| v.as_string())
            .filter(|s| !s.trim().is_empty())
    })
}

fn env_bool(env: &js_sys::Object, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|k| {
        let v = js_sys::Reflect::get(env, &(*k).into()).ok()?;
        v.as_bool()
            .or_else(|| v.as_string().map(|s| s == "1" || s.eq_ignore_ascii_case("true")))
    })
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct SaveFileForm {
    #[serde(rename = "editorContent")]
    pub editor_content: String,
    pub page: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RenamePageForm {
    pub action: String,
    pub new_page: String,
    pub page: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RenameCategoryForm {
    pub action: String,
    pub new_category: String,
    pub page: String,
}

/// Client for the wiki server's form endpoints. Response bodies are ignored;
/// only the status line matters.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form(&self, path: &str, form: &impl Serialize, ctx: &str) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let res = client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::http(res.status(), ctx))
        }
    }
}

/// Server side of the editor. `ApiClient` talks HTTP; tests swap in their own.
#[async_trait(?Send)]
pub(crate) trait EditorBackend {
    async fn save_file(&self, page: &str, content: &str) -> ApiResult<()>;
    async fn update_page_name(&self, page: &str, new_page: &str) -> ApiResult<()>;
    async fn update_page_category(&self, page: &str, new_category: &str) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl EditorBackend for ApiClient {
    async fn save_file(&self, page: &str, content: &str) -> ApiResult<()> {
        let form = SaveFileForm {
            editor_content: content.to_string(),
            page: page.to_string(),
        };
        self.post_form(SAVE_FILE_PATH, &form, "Save failed").await
    }

    async fn update_page_name(&self, page: &str, new_page: &str) -> ApiResult<()> {
        let form = RenamePageForm {
            action: "save".to_string(),
            new_page: new_page.to_string(),
            page: page.to_string(),
        };
        self.post_form(UPDATE_PAGE_NAME_PATH, &form, "Page rename rejected")
            .await
    }

    async fn update_page_category(&self, page: &str, new_category: &str) -> ApiResult<()> {
        let form = RenameCategoryForm {
            action: "save".to_string(),
            new_category: new_category.to_string(),
            page: page.to_string(),
        };
        self.post_form(UPDATE_PAGE_CATEGORY_PATH, &form, "Category update rejected")
            .await
    }
}
