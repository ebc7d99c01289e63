use crate::util::{backup_file_name, defer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Document, HtmlAnchorElement};

/// A detached `<a download>` pointing at an object URL for the backup blob.
pub(crate) struct BackupLink {
    pub link: HtmlAnchorElement,
    pub blob: Blob,
    pub url: String,
}

pub(crate) fn backup_link(
    document: &Document,
    page: &str,
    content: &str,
) -> Result<BackupLink, JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type("text/plain");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_download(&backup_file_name(page));
    link.set_href(&url);

    Ok(BackupLink { link, blob, url })
}

/// Offer `content` to the user as `<page>.txt` through a temporary anchor.
pub(crate) fn download_backup(page: &str, content: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let BackupLink { link, blob, url } = backup_link(&document, page, content)?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    // Revoke on the next tick so the download has picked up the blob.
    defer(0, move || {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke backup URL: {e:?}");
        }
    });

    log::info!(
        "Backup download offered for page {page} ({} bytes)",
        blob.size()
    );
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_download_backup_cleans_up_anchor() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let before = document
            .query_selector_all("a[download]")
            .expect("query")
            .length();

        download_backup("Home", "# Home\ncontent").expect("download should be offered");

        let after = document
            .query_selector_all("a[download]")
            .expect("query")
            .length();
        assert_eq!(before, after);
    }

    #[wasm_bindgen_test]
    async fn test_backup_link_names_file_after_page_and_holds_text() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");

        let backup = backup_link(&document, "Game Rules", "# Rules\nbé").expect("link");

        assert_eq!(backup.link.download(), "Game Rules.txt");
        assert_eq!(backup.link.href(), backup.url);
        assert!(backup.url.starts_with("blob:"));
        assert_eq!(backup.blob.type_(), "text/plain");

        let text = JsFuture::from(backup.blob.text()).await.expect("blob text");
        assert_eq!(text.as_string().as_deref(), Some("# Rules\nbé"));

        web_sys::Url::revoke_object_url(&backup.url).expect("revoke");
    }
}
