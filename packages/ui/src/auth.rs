//! Login context and hooks for the UI.
//!
//! The gateway is created once by the application and handed to
//! [`LoginProvider`], which makes it available to every widget below it. Nothing
//! in this crate reaches for a global SDK instance.

use std::rc::Rc;

use dioxus::prelude::*;
use gateway::AuthGateway;
use session::Settings;

use crate::platform::open_in_new_tab;

/// Everything the login widget needs from the application.
#[derive(Clone)]
pub struct LoginContext {
    gateway: Rc<dyn AuthGateway>,
    navigate: Rc<dyn Fn(&str)>,
    pub settings: Settings,
}

impl LoginContext {
    /// Profile redirects open a new browser tab unless
    /// [`with_navigator`](Self::with_navigator) says otherwise.
    pub fn new(gateway: impl AuthGateway + 'static, settings: Settings) -> Self {
        Self {
            gateway: Rc::new(gateway),
            navigate: Rc::new(open_in_new_tab),
            settings,
        }
    }

    /// Replace what happens with the profile URL once the redirect fires.
    pub fn with_navigator(mut self, navigate: impl Fn(&str) + 'static) -> Self {
        self.navigate = Rc::new(navigate);
        self
    }

    pub fn gateway(&self) -> Rc<dyn AuthGateway> {
        self.gateway.clone()
    }

    pub(crate) fn navigator(&self) -> Rc<dyn Fn(&str)> {
        self.navigate.clone()
    }
}

impl PartialEq for LoginContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gateway, &other.gateway)
            && Rc::ptr_eq(&self.navigate, &other.navigate)
            && self.settings == other.settings
    }
}

impl std::fmt::Debug for LoginContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginContext")
            .field("gateway", &self.gateway.provider_name())
            .field("settings", &self.settings)
            .finish()
    }
}

/// Get the login context provided by [`LoginProvider`].
pub fn use_login() -> LoginContext {
    use_context::<LoginContext>()
}

/// Provider component that injects the gateway and settings.
/// Wrap your app with this component before rendering a `LoginWidget`.
#[component]
pub fn LoginProvider(context: LoginContext, children: Element) -> Element {
    use_context_provider(move || context);

    rsx! {
        {children}
    }
}
