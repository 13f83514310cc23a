//! User-facing notifications produced by widget transitions.

pub const SIGN_IN_OK: &str = "Please Verify OTP to login!";
pub const SIGN_IN_FAILED: &str = "Twitter sign-in failed. Please try again.";
pub const CODE_OK: &str = "OTP verified successfully!";
pub const CODE_MISMATCH: &str = "Incorrect OTP. Please try again.";
pub const SIGN_OUT_OK: &str = "Logged out successfully!";
pub const SIGN_OUT_INCOMPLETE: &str =
    "Logout may not have fully completed. Please close this tab to end your session.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A fixed message for the user. Internal error details never end up here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    pub const fn info(message: &'static str) -> Self {
        Self { level: NoticeLevel::Info, message }
    }

    pub const fn success(message: &'static str) -> Self {
        Self { level: NoticeLevel::Success, message }
    }

    pub const fn warning(message: &'static str) -> Self {
        Self { level: NoticeLevel::Warning, message }
    }

    pub const fn error(message: &'static str) -> Self {
        Self { level: NoticeLevel::Error, message }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.level, NoticeLevel::Warning | NoticeLevel::Error)
    }
}
