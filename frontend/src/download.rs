use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config;
use crate::scroll_spy::layout::DownloadTrigger;
use crate::scroll_spy::section::FileRef;

/// URL the browser fetches for a downloadable file. Each path segment is
/// percent-encoded so manual names with spaces survive.
pub fn download_url(file: &FileRef) -> String {
    if file.path.starts_with("http://") || file.path.starts_with("https://") {
        return file.path.clone();
    }
    let encoded: Vec<String> = file
        .path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    config::asset_url(&encoded.join("/"))
}

/// Starts a download by clicking a throwaway `<a download>` element.
pub struct AnchorDownloader;

impl DownloadTrigger for AnchorDownloader {
    fn trigger(&self, file: &FileRef) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let anchor = match document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        {
            Some(anchor) => anchor,
            None => {
                warn!("could not create download link for {}", file.path);
                return;
            }
        };

        let url = download_url(file);
        anchor.set_href(&url);
        anchor.set_download(file.download_name());
        anchor.set_target("_blank");

        if body.append_child(&anchor).is_ok() {
            anchor.click();
            anchor.remove();
            info!("started download of {}", url);
        }
    }
}
