//! # Gateway crate — the identity provider seam
//!
//! Everything the sign-in widget knows about the hosted identity SDK goes through
//! the [`AuthGateway`] trait defined here. The widget never talks to the SDK
//! directly, so tests and previews can swap in [`ScriptedGateway`].
//!
//! ## Modules
//!
//! | Module | Target | Purpose |
//! |--------|--------|---------|
//! | [`config`] | all | Opaque provider credentials handed to the SDK at start-up |
//! | [`error`] | all | [`GatewayError`], the failure taxonomy of sign-in and sign-out |
//! | [`profile`] | all | [`Profile`], the signed-in user as reported by the provider |
//! | [`scripted`] | all | In-memory gateway with queued responses |
//! | `firebase` | `wasm32` | Bindings to the Firebase Auth compat SDK loaded in the page |

use async_trait::async_trait;

pub mod config;
pub mod error;
pub mod profile;
pub mod scripted;

#[cfg(target_arch = "wasm32")]
mod firebase;
#[cfg(target_arch = "wasm32")]
pub use firebase::FirebaseGateway;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use profile::Profile;
pub use scripted::ScriptedGateway;

/// Interactive sign-in and sign-out against a single configured provider.
///
/// The futures are not `Send`: on the web they wrap JS promises, and the widget
/// drives them from the UI thread.
#[async_trait(?Send)]
pub trait AuthGateway {
    /// Human readable provider name, used in log lines.
    fn provider_name(&self) -> &str;

    /// Run the provider's popup flow and resolve with the signed-in profile.
    async fn sign_in(&self) -> Result<Profile, GatewayError>;

    /// End the provider session for this page.
    async fn sign_out(&self) -> Result<(), GatewayError>;
}
