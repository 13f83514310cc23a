use dioxus::prelude::*;

use session::Settings;
use ui::{LoginContext, LoginProvider};
use views::{Home, StartupError};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Built exactly once, then injected into the widget tree.
    let context = use_hook(connect);

    match context {
        Ok(context) => rsx! {
            LoginProvider {
                context,
                Router::<Route> {}
            }
        },
        Err(message) => rsx! {
            StartupError { message }
        },
    }
}

/// Load settings and initialise the identity SDK.
fn connect() -> Result<LoginContext, String> {
    let settings = Settings::load().map_err(|e| {
        tracing::error!("Failed to load settings: {}", e);
        format!("Invalid settings: {e}")
    })?;
    if settings.gateway.is_blank() {
        tracing::warn!("No identity provider credentials configured");
    }

    #[cfg(target_arch = "wasm32")]
    {
        let gateway = gateway::FirebaseGateway::initialize(&settings.gateway).map_err(|e| {
            tracing::error!("Failed to initialise identity SDK: {}", e);
            e.to_string()
        })?;
        Ok(LoginContext::new(gateway, settings))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = settings;
        Err("Sign-in runs in the browser build only (dx serve --platform web).".to_string())
    }
}
