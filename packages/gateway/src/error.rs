//! Gateway failure taxonomy.

use thiserror::Error;

/// Why a sign-in or sign-out did not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The SDK is missing from the page or refused the configuration.
    #[error("identity SDK is not initialised: {0}")]
    NotInitialised(String),

    /// The user closed the popup, or a newer popup replaced it.
    #[error("sign-in popup was closed before completing")]
    PopupClosed,

    #[error("network error: {0}")]
    Network(String),

    /// Any other error reported by the provider, with its error code.
    #[error("provider error ({code}): {message}")]
    Provider { code: String, message: String },

    /// The SDK resolved with something that is not a user record.
    #[error("malformed provider response: {0}")]
    Malformed(String),

    /// A [`crate::ScriptedGateway`] ran out of queued responses.
    #[error("no scripted response for {0}")]
    Unscripted(&'static str),
}

impl GatewayError {
    /// Map a provider error code (e.g. `auth/popup-closed-by-user`) onto a variant.
    pub fn from_code(code: &str, message: &str) -> Self {
        match code {
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" => Self::PopupClosed,
            "auth/network-request-failed" => Self::Network(message.to_string()),
            _ => Self::Provider {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}
