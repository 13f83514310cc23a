//! Framework-independent core of the sign-in widget: the confirmation code, the
//! login state machine, the delayed profile redirect and the settings loader.

pub mod code;
pub mod machine;
pub mod notice;
pub mod redirect;
pub mod settings;

pub use code::SessionCode;
pub use machine::{LoginMachine, Pending, Stage};
pub use notice::{Notice, NoticeLevel};
pub use redirect::{profile_url, RedirectTimer};
pub use settings::{ProfileSettings, Settings, WidgetSettings};
