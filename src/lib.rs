mod api;
mod app;
mod backup;
mod components;
mod editor;
mod models;
mod outline;
mod pages;
mod state;
mod util;

pub use app::App;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("page editor starting");
    mount_to_body(App);
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::EditorConfig;
    use crate::models::EditorBootstrap;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_global(name: &str, value: &JsValue) {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::set(&window, &name.into(), value).expect("set global");
    }

    fn clear_global(name: &str) {
        let window = web_sys::window().expect("window");
        let _ = js_sys::Reflect::delete_property(&window, &name.into());
    }

    #[wasm_bindgen_test]
    fn test_config_defaults_to_current_origin() {
        clear_global("ENV");
        let config = EditorConfig::new();
        let origin = web_sys::window()
            .expect("window")
            .location()
            .origin()
            .expect("origin");
        assert_eq!(config.api_url, origin);
        assert!(config.navigate_on_failed_save);
    }

    #[wasm_bindgen_test]
    fn test_config_reads_window_env() {
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &"API_URL".into(), &"http://wiki.local:5000/".into())
            .expect("set API_URL");
        js_sys::Reflect::set(&env, &"navigate_on_failed_save".into(), &"false".into())
            .expect("set flag");
        set_global("ENV", &env);

        let config = EditorConfig::new();
        assert_eq!(config.api_url, "http://wiki.local:5000");
        assert!(!config.navigate_on_failed_save);

        clear_global("ENV");
    }

    #[wasm_bindgen_test]
    fn test_bootstrap_reads_window_editor() {
        let editor = js_sys::Object::new();
        js_sys::Reflect::set(&editor, &"page".into(), &"Rules".into()).expect("set page");
        js_sys::Reflect::set(&editor, &"category".into(), &"Games".into())
            .expect("set category");
        js_sys::Reflect::set(&editor, &"content".into(), &"# Rules".into())
            .expect("set content");
        set_global("EDITOR", &editor);

        let b = EditorBootstrap::from_window();
        assert_eq!(b.page, "Rules");
        assert_eq!(b.category, "Games");
        assert_eq!(b.content, "# Rules");

        clear_global("EDITOR");
        assert_eq!(EditorBootstrap::from_window(), EditorBootstrap::default());
    }
}
