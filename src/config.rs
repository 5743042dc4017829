//! Frontend Configuration
//!
//! The bed service location comes from a `<meta>` tag in `index.html`.

use bed_lifecycle::ApiConfig;

/// `<meta name="bed-api-base-url" content="https://...">`
pub const BASE_URL_META: &str = "bed-api-base-url";

/// Service config from the page, falling back to the default base URL
pub fn api_config() -> ApiConfig {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| {
            document
                .query_selector(&format!("meta[name=\"{}\"]", BASE_URL_META))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));
    ApiConfig::with_override(content.as_deref())
}
