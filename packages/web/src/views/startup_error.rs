use dioxus::prelude::*;

/// Shown instead of the app when settings or the identity SDK fail to load.
#[component]
pub fn StartupError(message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",
            h1 {
                style: "margin-bottom: 0.5rem; color: #37352f; font-weight: 700; font-size: 1.75rem;",
                "Sign-in is unavailable"
            }
            p {
                style: "color: #787774; font-size: 0.9375rem;",
                "{message}"
            }
        }
    }
}
