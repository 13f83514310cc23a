//! # Signed-in profile
//!
//! [`Profile`] is the projection of the provider's user record that the widget
//! needs: a stable `uid`, the human readable display name used for the welcome
//! line and the profile link, and two optional extras (email, avatar URL).
//!
//! Providers may omit the display name. That case is stored as an empty string so
//! the widget can still render, and [`Profile::has_display_name`] lets callers
//! skip anything that needs a real name.

use serde::{Deserialize, Serialize};

/// User information returned by a successful sign-in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub uid: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl Profile {
    /// Profile with just a uid and display name.
    pub fn new(uid: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Builder method to attach an avatar URL.
    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    /// Builder method to attach an email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn has_display_name(&self) -> bool {
        !self.display_name.trim().is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
