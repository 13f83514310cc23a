//! This crate contains the sign-in widget and its supporting components.

mod auth;
pub use auth::{use_login, LoginContext, LoginProvider};

mod login_widget;
pub use login_widget::LoginWidget;

mod platform;

pub mod views;
