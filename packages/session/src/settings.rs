//! # Application settings
//!
//! Layered with the `config` crate, later sources win:
//!
//! 1. Built-in defaults (profile host `x.com`, 1 second redirect delay).
//! 2. `settings.toml` in the working directory (native builds only, optional).
//! 3. `LOGIN_<SECTION>__<KEY>` variables at run time, e.g.
//!    `LOGIN_PROFILE__HOST=twitter.com` or `LOGIN_GATEWAY__API_KEY=...`.
//! 4. `FIREBASE_*` variables captured at build time. This is how the browser
//!    build receives credentials, much like a bundler inlines `process.env`.
//!    They are applied as overrides, so nothing at run time replaces them.
//!
//! ```toml
//! [gateway]
//! api_key = "..."
//! auth_domain = "my-app.firebaseapp.com"
//! project_id = "my-app"
//!
//! [profile]
//! host = "x.com"
//! redirect_delay_ms = 1000
//!
//! [widget]
//! title = "Twitter Login"
//! sign_in_label = "Sign in with Twitter"
//! ```
//!
//! Gateway values are handed to the SDK verbatim. Environment values are never
//! type-guessed, so an id like `000123` keeps its leading zeros.

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use gateway::GatewayConfig;
use serde::Deserialize;

/// Where the verified user is sent, and when.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfileSettings {
    pub host: String,
    pub redirect_delay_ms: u64,
}

impl ProfileSettings {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            host: "x.com".into(),
            redirect_delay_ms: 1000,
        }
    }
}

/// Static text around the widget.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WidgetSettings {
    pub title: String,
    pub sign_in_label: String,
    #[serde(default)]
    pub subtitle: Option<String>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            title: "Twitter Login".into(),
            sign_in_label: "Sign in with Twitter".into(),
            subtitle: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub gateway: GatewayConfig,
    pub profile: ProfileSettings,
    pub widget: WidgetSettings,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("profile.host", "x.com")?
            .set_default("profile.redirect_delay_ms", 1000)?
            .set_default("widget.title", "Twitter Login")?
            .set_default("widget.sign_in_label", "Sign in with Twitter")?;

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.add_source(
            config::File::with_name("settings.toml")
                .format(config::FileFormat::Toml)
                .required(false),
        );

        let config = builder
            .add_source(
                Environment::with_prefix("LOGIN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("gateway.api_key", option_env!("FIREBASE_API_KEY"))?
            .set_override_option("gateway.auth_domain", option_env!("FIREBASE_AUTH_DOMAIN"))?
            .set_override_option("gateway.project_id", option_env!("FIREBASE_PROJECT_ID"))?
            .set_override_option(
                "gateway.storage_bucket",
                option_env!("FIREBASE_STORAGE_BUCKET"),
            )?
            .set_override_option(
                "gateway.messaging_sender_id",
                option_env!("FIREBASE_MESSAGING_SENDER_ID"),
            )?
            .set_override_option("gateway.app_id", option_env!("FIREBASE_APP_ID"))?
            .set_override_option(
                "gateway.measurement_id",
                option_env!("FIREBASE_MEASUREMENT_ID"),
            )?
            .build()?;

        config.try_deserialize()
    }
}
