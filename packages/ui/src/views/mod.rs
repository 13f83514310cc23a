mod sign_in;
pub use sign_in::SignInView;

mod verify_code;
pub use verify_code::VerifyCodeView;

mod welcome;
pub use welcome::WelcomeView;
