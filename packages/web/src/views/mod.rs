mod home;
pub use home::Home;

mod startup_error;
pub use startup_error::StartupError;
