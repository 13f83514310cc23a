//! # Login widget
//!
//! Renders exactly one of three views, picked from the [`LoginMachine`] stage:
//!
//! - **Signed out**: [`SignInView`]. Clicking runs the gateway popup; the button
//!   stays disabled until the popup resolves, so a second click cannot start a
//!   second popup.
//! - **Awaiting verification**: [`VerifyCodeView`] with the generated code.
//! - **Verified**: [`WelcomeView`]. Entering this stage schedules the profile
//!   redirect (see [`use_profile_redirect`]).
//!
//! Every transition hands back a [`session::Notice`] which is shown through
//! [`notify`].

use std::rc::Rc;

use dioxus::prelude::*;
use session::{LoginMachine, Pending, ProfileSettings, RedirectTimer, Stage};

use crate::auth::use_login;
use crate::platform::{notify, sleep};
use crate::views::{SignInView, VerifyCodeView, WelcomeView};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[component]
pub fn LoginWidget() -> Element {
    let login = use_login();
    let flow = use_login_flow();
    let mut machine = flow.machine;

    let state = machine();
    let widget = &login.settings.widget;

    let body = match (state.stage(), state.profile()) {
        (Stage::Verified, Some(profile)) => rsx! {
            WelcomeView {
                profile: profile.clone(),
                signing_out: state.pending() == Some(Pending::SignOut),
                on_logout: flow.logout,
            }
        },
        (Stage::AwaitingVerification, _) => rsx! {
            VerifyCodeView {
                code: state.session_code().map(|c| c.to_string()).unwrap_or_default(),
                entered: state.entered_code().to_string(),
                on_input: move |value: String| machine.write().set_entered_code(value),
                on_verify: flow.verify,
            }
        },
        _ => rsx! {
            SignInView {
                label: widget.sign_in_label.clone(),
                pending: state.pending() == Some(Pending::SignIn),
                on_sign_in: flow.start_sign_in,
            }
        },
    };

    rsx! {
        document::Stylesheet { href: LOGIN_CSS }

        div {
            class: "login-background",
            div {
                class: "login-card",
                if let Some(ref subtitle) = widget.subtitle {
                    h2 { "{subtitle}" }
                }
                h2 { class: "login-title", "{widget.title}" }
                {body}
            }
        }
    }
}

/// The widget's state and the actions its buttons trigger.
#[derive(Clone, Copy)]
struct LoginFlow {
    machine: Signal<LoginMachine>,
    start_sign_in: Callback<()>,
    verify: Callback<()>,
    logout: Callback<()>,
}

fn use_login_flow() -> LoginFlow {
    let login = use_login();
    let mut machine = use_signal(LoginMachine::new);
    use_profile_redirect(machine, login.settings.profile.clone(), login.navigator());

    let gateway = login.gateway();
    let start_sign_in = use_callback(move |_: ()| {
        if !machine.write().begin_sign_in() {
            tracing::debug!("Sign-in already in progress");
            return;
        }
        let gateway = gateway.clone();
        spawn(async move {
            tracing::debug!("Opening {} sign-in popup", gateway.provider_name());
            let result = gateway.sign_in().await;
            let shown = machine.write().finish_sign_in(result);
            notify(&shown);
        });
    });

    let verify = use_callback(move |_: ()| {
        let shown = machine.write().verify();
        if let Some(shown) = shown {
            notify(&shown);
        }
    });

    let gateway = login.gateway();
    let logout = use_callback(move |_: ()| {
        if !machine.write().begin_sign_out() {
            return;
        }
        let gateway = gateway.clone();
        spawn(async move {
            let result = gateway.sign_out().await;
            let shown = machine.write().finish_sign_out(result);
            notify(&shown);
        });
    });

    LoginFlow {
        machine,
        start_sign_in,
        verify,
        logout,
    }
}

/// Navigate to the verified user's profile after the configured delay.
///
/// The timer handle lives in a signal owned by the widget. A new target, a
/// withdrawn target (logout started, stage left) or the widget unmounting all
/// drop the handle, which aborts the pending redirect.
fn use_profile_redirect(
    machine: Signal<LoginMachine>,
    profile: ProfileSettings,
    navigate: Rc<dyn Fn(&str)>,
) {
    let delay = profile.redirect_delay();
    let target = use_memo(move || machine.read().redirect_target(&profile.host));
    let mut timer = use_signal(|| Option::<RedirectTimer>::None);

    use_effect(move || {
        let Some(url) = target() else {
            timer.set(None);
            return;
        };
        tracing::debug!("Redirecting to {url} in {delay:?}");
        let navigate = navigate.clone();
        let (handle, fire) = RedirectTimer::schedule(sleep(delay), move || navigate(&url));
        spawn(fire);
        timer.set(Some(handle));
    });
}
