mod debounce;

pub(crate) use debounce::{defer, Debouncer};

use wasm_bindgen::JsValue;

pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

/// Read-only page view, the target of "return to page".
pub(crate) fn page_view_url(page: &str) -> String {
    format!("/page?page={}", urlencoding::encode(page))
}

/// Editor location for a page; used to rewrite the history entry after a rename.
pub(crate) fn editor_url(page: &str) -> String {
    format!("/editor?page={}", urlencoding::encode(page))
}

/// Name of the backup file offered when a save does not reach the server.
pub(crate) fn backup_file_name(page: &str) -> String {
    format!("{page}.txt")
}

/// Swap the current history entry for `url` without reloading.
pub(crate) fn replace_history(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(url))
}

pub(crate) fn is_mac_platform() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().platform().ok())
        .map(|p| p.contains("Mac"))
        .unwrap_or(false)
}

/// Cmd+S on macOS, Ctrl+S elsewhere.
pub(crate) fn is_save_shortcut(key: &str, meta: bool, ctrl: bool, is_mac: bool) -> bool {
    let modifier = if is_mac { meta } else { ctrl };
    modifier && key.eq_ignore_ascii_case("s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_url_encodes_identifier() {
        assert_eq!(page_view_url("Home"), "/page?page=Home");
        assert_eq!(page_view_url("House Rules"), "/page?page=House%20Rules");
        assert_eq!(page_view_url("a&b"), "/page?page=a%26b");
    }

    #[test]
    fn test_editor_url() {
        assert_eq!(editor_url("Hello"), "/editor?page=Hello");
        assert_eq!(editor_url("Q&A"), "/editor?page=Q%26A");
    }

    #[test]
    fn test_backup_file_name() {
        assert_eq!(backup_file_name("Home"), "Home.txt");
        assert_eq!(backup_file_name("House Rules"), "House Rules.txt");
    }

    #[test]
    fn test_save_shortcut_per_platform() {
        assert!(is_save_shortcut("s", true, false, true));
        assert!(!is_save_shortcut("s", false, true, true));

        assert!(is_save_shortcut("s", false, true, false));
        assert!(is_save_shortcut("S", false, true, false));
        assert!(!is_save_shortcut("s", true, false, false));

        assert!(!is_save_shortcut("b", false, true, false));
        assert!(!is_save_shortcut("s", false, false, false));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_replace_history_rewrites_location_without_reload() {
        let window = web_sys::window().expect("window");
        let original = window.location().href().expect("href");
        let history_len = window.history().expect("history").length().expect("length");

        replace_history(&editor_url("Hello World")).expect("replaceState should succeed");

        let location = window.location();
        assert_eq!(location.pathname().expect("pathname"), "/editor");
        assert_eq!(location.search().expect("search"), "?page=Hello%20World");
        assert_eq!(
            window.history().expect("history").length().expect("length"),
            history_len
        );

        replace_history(&original).expect("restore location");
    }
}
