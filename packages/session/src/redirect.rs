//! # Post-verification redirect
//!
//! Once the code is confirmed the widget opens the user's public profile after a
//! short delay. [`profile_url`] builds the link, [`RedirectTimer`] owns the delay.
//!
//! The timer is split in two halves: the handle, which the widget keeps for as
//! long as it stays in the verified stage, and a future the caller spawns on
//! whatever executor it has (`dioxus::spawn` in the UI, `tokio::spawn` in tests).
//! Cancelling or dropping the handle aborts the future, so a redirect can never
//! fire after the widget left the verified stage or was torn down.

use std::future::Future;

use futures::future::{abortable, AbortHandle};

/// Link to a public profile: `https://<host>/<url-encoded display name>`.
///
/// Returns `None` for a blank display name, there is nothing to link to.
/// Otherwise the name is encoded exactly as the provider returned it.
pub fn profile_url(host: &str, display_name: &str) -> Option<String> {
    if display_name.trim().is_empty() {
        return None;
    }
    let host = host.trim_end_matches('/');
    Some(format!("https://{host}/{}", urlencoding::encode(display_name)))
}

/// Handle to a scheduled redirect. Dropping it cancels the redirect.
#[derive(Debug)]
pub struct RedirectTimer {
    handle: AbortHandle,
}

impl RedirectTimer {
    /// Run `navigate` once `delay` completes, unless the timer is cancelled first.
    ///
    /// The returned future does nothing until it is polled; spawn it.
    pub fn schedule<D, F>(delay: D, navigate: F) -> (Self, impl Future<Output = ()>)
    where
        D: Future<Output = ()>,
        F: FnOnce(),
    {
        let (task, handle) = abortable(async move {
            delay.await;
            navigate();
        });

        let fire = async move {
            if task.await.is_err() {
                tracing::debug!("Profile redirect cancelled");
            }
        };

        (Self { handle }, fire)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for RedirectTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
