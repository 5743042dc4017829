//! Window Commands
//!
//! Side-channel navigation (CSV export).

/// Open `url` in a new browsing context; the browser handles the download.
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| format!("window.open failed: {:?}", e))?;
    Ok(())
}
