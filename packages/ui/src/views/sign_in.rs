use dioxus::prelude::*;

/// Signed-out view: a single button that starts the provider popup.
#[component]
pub fn SignInView(label: String, pending: bool, on_sign_in: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "login-btn",
            disabled: pending,
            onclick: move |_| on_sign_in.call(()),
            if pending {
                "Signing in..."
            } else {
                "{label}"
            }
        }
    }
}
