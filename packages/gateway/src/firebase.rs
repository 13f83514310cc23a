//! # Firebase Auth binding (WASM only)
//!
//! Talks to the Firebase *compat* browser bundle, which the page loads as plain
//! `<script>` tags before the WASM module boots (see `packages/web/Dioxus.toml`).
//! The bundle exposes a global `firebase` namespace:
//!
//! - `firebase.initializeApp(config)` registers the web app once per page.
//! - `firebase.auth()` returns the default `Auth` instance.
//! - `auth.signInWithPopup(new firebase.auth.TwitterAuthProvider())` resolves with
//!   a `UserCredential` whose `user.toJSON()` is a plain object
//!   (`uid`, `displayName`, `email`, `photoURL`, ...).
//! - `auth.signOut()` resolves with `undefined`.
//!
//! Rejections carry a `code` such as `auth/popup-closed-by-user`, which
//! [`GatewayError::from_code`] maps onto the gateway's error taxonomy.

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::{AuthGateway, GatewayConfig, GatewayError, Profile};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = firebase, js_name = initializeApp, catch)]
    fn initialize_app(config: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = firebase, js_name = auth, catch)]
    fn firebase_auth() -> Result<Auth, JsValue>;

    type Auth;

    #[wasm_bindgen(method, js_name = signInWithPopup)]
    fn sign_in_with_popup(this: &Auth, provider: &TwitterAuthProvider) -> Promise;

    #[wasm_bindgen(method, js_name = signOut)]
    fn sign_out(this: &Auth) -> Promise;

    #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
    type TwitterAuthProvider;

    #[wasm_bindgen(constructor, js_namespace = ["firebase", "auth"])]
    fn new() -> TwitterAuthProvider;
}

/// Gateway backed by the Firebase Auth compat SDK with the Twitter provider.
#[derive(Clone)]
pub struct FirebaseGateway {
    auth: Auth,
}

impl FirebaseGateway {
    /// Register the web app with the SDK and grab its `Auth` instance.
    ///
    /// Call once at start-up; the SDK rejects a second default app.
    pub fn initialize(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let global = js_sys::global();
        let loaded = Reflect::has(&global, &JsValue::from_str("firebase")).unwrap_or(false);
        if !loaded {
            return Err(GatewayError::NotInitialised(
                "the firebase compat scripts are not loaded".to_string(),
            ));
        }

        let js_config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| GatewayError::NotInitialised(e.to_string()))?;
        initialize_app(&js_config).map_err(|e| GatewayError::NotInitialised(describe(&e)))?;

        let auth = firebase_auth().map_err(|e| GatewayError::NotInitialised(describe(&e)))?;
        tracing::info!("Firebase initialised for project {}", config.project_id);

        Ok(Self { auth })
    }

    fn auth(&self) -> &Auth {
        &self.auth
    }
}

#[async_trait(?Send)]
impl AuthGateway for FirebaseGateway {
    fn provider_name(&self) -> &str {
        "twitter"
    }

    async fn sign_in(&self) -> Result<Profile, GatewayError> {
        let provider = TwitterAuthProvider::new();
        let credential = JsFuture::from(self.auth().sign_in_with_popup(&provider))
            .await
            .map_err(|e| to_gateway_error(&e))?;

        let user = Reflect::get(&credential, &JsValue::from_str("user"))
            .map_err(|e| GatewayError::Malformed(describe(&e)))?;
        if user.is_undefined() || user.is_null() {
            return Err(GatewayError::Malformed("credential has no user".to_string()));
        }

        let plain = match Reflect::get(&user, &JsValue::from_str("toJSON")) {
            Ok(to_json) if to_json.is_function() => to_json
                .unchecked_into::<Function>()
                .call0(&user)
                .map_err(|e| GatewayError::Malformed(describe(&e)))?,
            _ => user,
        };

        serde_wasm_bindgen::from_value(plain).map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        JsFuture::from(self.auth().sign_out())
            .await
            .map(|_| ())
            .map_err(|e| to_gateway_error(&e))
    }
}

fn to_gateway_error(error: &JsValue) -> GatewayError {
    let code = string_field(error, "code").unwrap_or_default();
    let message = string_field(error, "message").unwrap_or_else(|| describe(error));
    GatewayError::from_code(&code, &message)
}

fn string_field(value: &JsValue, field: &str) -> Option<String> {
    Reflect::get(value, &JsValue::from_str(field))
        .ok()
        .and_then(|v| v.as_string())
}

fn describe(value: &JsValue) -> String {
    string_field(value, "message")
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
