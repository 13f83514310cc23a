//! Landing page: the login widget, nothing else.

use dioxus::prelude::*;
use ui::LoginWidget;

#[component]
pub fn Home() -> Element {
    rsx! {
        LoginWidget {}
    }
}
