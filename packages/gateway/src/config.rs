//! Provider credentials for the hosted identity SDK.

use serde::{Deserialize, Serialize};

/// Web app configuration handed verbatim to the SDK's `initializeApp`.
///
/// Values are opaque: nothing here is validated, the SDK reports bad
/// credentials when a sign-in is attempted. Serialises with the SDK's
/// camelCase field names and deserialises from snake_case settings keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct GatewayConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl GatewayConfig {
    /// True when no credentials were supplied at all.
    pub fn is_blank(&self) -> bool {
        self.api_key.is_empty() && self.auth_domain.is_empty() && self.project_id.is_empty()
    }
}
