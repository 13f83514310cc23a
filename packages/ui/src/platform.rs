//! Browser side effects, with native fallbacks so the crate builds off-WASM.

use std::time::Duration;

use session::{Notice, NoticeLevel};

/// Show a notice to the user. On the web this is a blocking `alert`.
pub(crate) fn notify(notice: &Notice) {
    match notice.level {
        NoticeLevel::Warning | NoticeLevel::Error => tracing::warn!("{}", notice.message),
        NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", notice.message),
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice.message);
        }
    }
}

/// Open `url` in a new browser tab.
pub(crate) fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window().map(|window| window.open_with_url_and_target(url, "_blank")) {
            Some(Ok(_)) => tracing::info!("Opened {url}"),
            _ => tracing::error!("Failed to open {url}"),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = open::that(url) {
            tracing::error!("Failed to open browser: {}", e);
        }
    }
}

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
