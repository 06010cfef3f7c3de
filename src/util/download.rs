//! Save server-generated bytes as a file in the browser.

/// Default file name for the user export.
pub const USERS_CSV_FILE_NAME: &str = "travel_agents.csv";

/// Failure building the download link.
#[derive(Debug, thiserror::Error)]
#[error("download failed: {0}")]
pub struct DownloadError(String);

/// Trigger a browser download of `bytes` under `file_name`.
///
/// # Errors
///
/// Returns a [`DownloadError`] when the blob or anchor cannot be created, or
/// always on native builds.
pub fn save_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), DownloadError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let fail = |e: wasm_bindgen::JsValue| DownloadError(format!("{e:?}"));
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(fail)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(fail)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DownloadError("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(fail)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| DownloadError("anchor cast".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url).map_err(fail)?;
        log::info!("download: saved {} bytes as {file_name}", bytes.len());
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_name, mime, bytes);
        Err(DownloadError("not available outside the browser".to_owned()))
    }
}
