use dioxus::prelude::*;

/// Awaiting-verification view: shows the session code and asks for it back.
#[component]
pub fn VerifyCodeView(
    code: String,
    entered: String,
    on_input: EventHandler<String>,
    on_verify: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "otp-container",
            h3 { class: "otp-header", "OTP: {code}" }
            input {
                class: "otp-input",
                r#type: "text",
                placeholder: "Enter OTP",
                value: "{entered}",
                oninput: move |evt: FormEvent| on_input.call(evt.value()),
            }
            button {
                class: "login-btn",
                onclick: move |_| on_verify.call(()),
                "Verify OTP"
            }
        }
    }
}
