use dioxus::prelude::*;
use gateway::Profile;

/// Verified view: greets the user and offers to log out.
#[component]
pub fn WelcomeView(profile: Profile, signing_out: bool, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "welcome-container",
            if let Some(ref avatar) = profile.photo_url {
                img {
                    class: "welcome-avatar",
                    src: "{avatar}",
                    alt: "Avatar",
                }
            }
            h3 { class: "welcome-header", "Welcome, {profile.display_name}!" }
            button {
                class: "login-btn",
                disabled: signing_out,
                onclick: move |_| on_logout.call(()),
                if signing_out { "Logging out..." } else { "Logout" }
            }
        }
    }
}
