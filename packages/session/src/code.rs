//! Six-digit confirmation code shown after sign-in.

use std::fmt;

use rand::Rng;

/// Smallest code that can be drawn.
pub const CODE_MIN: u32 = 100_000;
/// Largest code that can be drawn.
pub const CODE_MAX: u32 = 999_999;

/// A locally generated confirmation code.
///
/// Always six ASCII digits with no leading zero. It is displayed to the same
/// person who has to type it back, so it confirms intent, nothing more.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCode(String);

impl SessionCode {
    /// Draw a fresh code from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draw a fresh code uniformly from `CODE_MIN..=CODE_MAX`.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(CODE_MIN..=CODE_MAX).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact comparison against user input. No trimming, no normalisation.
    pub fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }
}

impl fmt::Display for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
impl From<&str> for SessionCode {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
