//! # Login state machine
//!
//! [`LoginMachine`] holds the widget's whole state: the signed-in profile, the
//! generated [`SessionCode`], whatever the user has typed so far, the verified
//! flag, and the gateway call currently in flight (if any).
//!
//! The visible [`Stage`] is derived, never stored:
//!
//! | Profile | Verified | Stage |
//! |---------|----------|-------|
//! | absent  | any      | [`Stage::SignedOut`] |
//! | present | `false`  | [`Stage::AwaitingVerification`] |
//! | present | `true`   | [`Stage::Verified`] |
//!
//! Gateway calls are split into `begin_*` / `finish_*` pairs so the caller can
//! await the gateway between them without holding a borrow of the machine.
//! `begin_*` refuses to start while another call is pending, which is how
//! double clicks on the sign-in button are de-duplicated.

use gateway::{GatewayError, Profile};
use rand::Rng;

use crate::code::SessionCode;
use crate::notice::{self, Notice};
use crate::redirect::profile_url;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    SignedOut,
    AwaitingVerification,
    Verified,
}

/// Gateway call in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    SignIn,
    SignOut,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginMachine {
    profile: Option<Profile>,
    code: Option<SessionCode>,
    entered: String,
    verified: bool,
    pending: Option<Pending>,
}

impl LoginMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        match (&self.profile, self.verified) {
            (None, _) => Stage::SignedOut,
            (Some(_), false) => Stage::AwaitingVerification,
            (Some(_), true) => Stage::Verified,
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn session_code(&self) -> Option<&SessionCode> {
        self.code.as_ref()
    }

    pub fn entered_code(&self) -> &str {
        &self.entered
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Mark a sign-in as started. Returns `false` (and changes nothing) unless
    /// the widget is signed out with no other call in flight.
    pub fn begin_sign_in(&mut self) -> bool {
        if self.pending.is_some() || self.stage() != Stage::SignedOut {
            return false;
        }
        self.pending = Some(Pending::SignIn);
        true
    }

    /// Apply the gateway's sign-in result.
    pub fn finish_sign_in(&mut self, result: Result<Profile, GatewayError>) -> Notice {
        self.finish_sign_in_with(result, &mut rand::thread_rng())
    }

    /// Same as [`finish_sign_in`](Self::finish_sign_in) with an explicit RNG for the code.
    pub fn finish_sign_in_with<R: Rng + ?Sized>(
        &mut self,
        result: Result<Profile, GatewayError>,
        rng: &mut R,
    ) -> Notice {
        if self.pending == Some(Pending::SignIn) {
            self.pending = None;
        }

        match result {
            Ok(profile) => {
                tracing::info!(uid = %profile.uid, name = %profile.display_name, "Logged in user");
                self.profile = Some(profile);
                self.code = Some(SessionCode::generate_with(rng));
                self.verified = false;
                Notice::info(notice::SIGN_IN_OK)
            }
            Err(e) => {
                tracing::error!("Error during sign-in: {e}");
                Notice::error(notice::SIGN_IN_FAILED)
            }
        }
    }

    /// Record the current contents of the code field.
    pub fn set_entered_code(&mut self, value: impl Into<String>) {
        self.entered = value.into();
    }

    /// Compare the entered code with the session code.
    ///
    /// Returns `None` outside [`Stage::AwaitingVerification`], where there is
    /// nothing to verify.
    pub fn verify(&mut self) -> Option<Notice> {
        if self.stage() != Stage::AwaitingVerification {
            return None;
        }
        let code = self.code.as_ref()?;

        if code.matches(&self.entered) {
            self.verified = true;
            Some(Notice::success(notice::CODE_OK))
        } else {
            tracing::debug!("Entered code does not match");
            Some(Notice::error(notice::CODE_MISMATCH))
        }
    }

    /// Mark a sign-out as started. Returns `false` when signed out or busy.
    pub fn begin_sign_out(&mut self) -> bool {
        if self.pending.is_some() || self.profile.is_none() {
            return false;
        }
        self.pending = Some(Pending::SignOut);
        true
    }

    /// Apply the gateway's sign-out result.
    ///
    /// Local state is cleared either way. When the gateway failed the provider
    /// session may still be alive, and the notice says so.
    pub fn finish_sign_out(&mut self, result: Result<(), GatewayError>) -> Notice {
        let pending = self.pending.take();
        debug_assert!(matches!(pending, None | Some(Pending::SignOut)));

        let outcome = match result {
            Ok(()) => Notice::success(notice::SIGN_OUT_OK),
            Err(e) => {
                tracing::error!("Error during logout: {e}");
                Notice::warning(notice::SIGN_OUT_INCOMPLETE)
            }
        };
        self.clear();
        outcome
    }

    /// Profile link to open, while verified and not signing out.
    pub fn redirect_target(&self, host: &str) -> Option<String> {
        if self.stage() != Stage::Verified || self.pending.is_some() {
            return None;
        }
        let profile = self.profile.as_ref()?;
        profile_url(host, &profile.display_name)
    }

    fn clear(&mut self) {
        self.profile = None;
        self.code = None;
        self.entered.clear();
        self.verified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn alice() -> Profile {
        Profile::new("uid-alice", "alice")
    }

    fn signed_in() -> LoginMachine {
        let mut machine = LoginMachine::new();
        assert!(machine.begin_sign_in());
        machine.finish_sign_in(Ok(alice()));
        machine
    }

    fn verified() -> LoginMachine {
        let mut machine = signed_in();
        let code = machine.session_code().unwrap().to_string();
        machine.set_entered_code(code);
        machine.verify();
        machine
    }

    #[test]
    fn test_initial_state() {
        let machine = LoginMachine::new();
        assert_eq!(machine.stage(), Stage::SignedOut);
        assert!(machine.profile().is_none());
        assert!(machine.session_code().is_none());
        assert_eq!(machine.entered_code(), "");
        assert!(!machine.is_verified());
        assert_eq!(machine.pending(), None);
    }

    #[test]
    fn test_sign_in_success() {
        let mut machine = LoginMachine::new();
        assert!(machine.begin_sign_in());
        assert_eq!(machine.pending(), Some(Pending::SignIn));
        assert_eq!(machine.stage(), Stage::SignedOut);

        let shown = machine.finish_sign_in(Ok(alice()));
        assert_eq!(shown, Notice::info(notice::SIGN_IN_OK));
        assert_eq!(machine.stage(), Stage::AwaitingVerification);
        assert_eq!(machine.pending(), None);
        assert_eq!(machine.profile(), Some(&alice()));

        let code = machine.session_code().unwrap().as_str();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_sign_in_rejected() {
        let mut machine = LoginMachine::new();
        assert!(machine.begin_sign_in());

        let shown = machine.finish_sign_in(Err(GatewayError::PopupClosed));
        assert_eq!(shown, Notice::error(notice::SIGN_IN_FAILED));
        assert!(shown.is_failure());
        assert_eq!(machine.stage(), Stage::SignedOut);
        assert!(machine.profile().is_none());
        assert!(machine.session_code().is_none());
        assert_eq!(machine.pending(), None);
    }

    #[test]
    fn test_second_sign_in_while_pending_is_ignored() {
        let mut machine = LoginMachine::new();
        assert!(machine.begin_sign_in());
        assert!(!machine.begin_sign_in());
        assert_eq!(machine.pending(), Some(Pending::SignIn));
    }

    #[test]
    fn test_sign_in_refused_when_signed_in() {
        let mut machine = signed_in();
        assert!(!machine.begin_sign_in());
        assert_eq!(machine.pending(), None);
    }

    #[test]
    fn test_entering_code_does_not_transition() {
        let mut machine = signed_in();
        machine.set_entered_code("12");
        machine.set_entered_code("123");
        assert_eq!(machine.entered_code(), "123");
        assert_eq!(machine.stage(), Stage::AwaitingVerification);
    }

    #[test]
    fn test_verify_exact_code() {
        let mut machine = signed_in();
        let code = machine.session_code().unwrap().to_string();

        machine.set_entered_code(format!("{code} "));
        assert_eq!(machine.verify(), Some(Notice::error(notice::CODE_MISMATCH)));
        assert_eq!(machine.stage(), Stage::AwaitingVerification);

        machine.set_entered_code(code);
        assert_eq!(machine.verify(), Some(Notice::success(notice::CODE_OK)));
        assert_eq!(machine.stage(), Stage::Verified);
        assert!(machine.is_verified());
    }

    #[test]
    fn test_wrong_code() {
        let mut machine = signed_in();
        machine.code = Some(SessionCode::from("123456"));
        machine.set_entered_code("654321");

        let shown = machine.verify().unwrap();
        assert_eq!(shown, Notice::error(notice::CODE_MISMATCH));
        assert_eq!(machine.stage(), Stage::AwaitingVerification);
        assert!(!machine.is_verified());

        // No lockout: the right code still works afterwards.
        machine.set_entered_code("123456");
        assert_eq!(machine.verify(), Some(Notice::success(notice::CODE_OK)));
    }

    #[test]
    fn test_verify_outside_awaiting_is_noop() {
        let mut machine = LoginMachine::new();
        machine.set_entered_code("123456");
        assert_eq!(machine.verify(), None);

        let mut machine = verified();
        assert_eq!(machine.verify(), None);
        assert_eq!(machine.stage(), Stage::Verified);
    }

    #[test]
    fn test_logout_clears_everything() {
        for mut machine in [signed_in(), verified()] {
            assert!(machine.begin_sign_out());
            let shown = machine.finish_sign_out(Ok(()));
            assert_eq!(shown, Notice::success(notice::SIGN_OUT_OK));
            assert_eq!(machine, LoginMachine::new());
            assert_eq!(machine.stage(), Stage::SignedOut);
        }
    }

    #[test]
    fn test_logout_failure_still_clears_locally() {
        let mut machine = verified();
        assert!(machine.begin_sign_out());
        let shown = machine.finish_sign_out(Err(GatewayError::Network("offline".into())));

        assert_eq!(shown, Notice::warning(notice::SIGN_OUT_INCOMPLETE));
        assert!(shown.is_failure());
        assert_eq!(machine, LoginMachine::new());
    }

    #[test]
    fn test_sign_out_refused_when_signed_out() {
        let mut machine = LoginMachine::new();
        assert!(!machine.begin_sign_out());
    }

    #[test]
    fn test_new_sign_in_draws_a_new_code() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut machine = LoginMachine::new();

        machine.begin_sign_in();
        machine.finish_sign_in_with(Ok(alice()), &mut rng);
        let first = machine.session_code().cloned().unwrap();

        machine.begin_sign_out();
        machine.finish_sign_out(Ok(()));
        assert!(machine.session_code().is_none());

        machine.begin_sign_in();
        machine.finish_sign_in_with(Ok(alice()), &mut rng);
        let second = machine.session_code().cloned().unwrap();

        // Same seed, fresh draws: the second code comes from a later RNG state.
        let mut replay = StdRng::seed_from_u64(3);
        assert_eq!(first, SessionCode::generate_with(&mut replay));
        assert_eq!(second, SessionCode::generate_with(&mut replay));
        assert_eq!(machine.stage(), Stage::AwaitingVerification);
    }

    #[test]
    fn test_redirect_target() {
        let mut machine = signed_in();
        assert_eq!(machine.redirect_target("x.com"), None);

        let code = machine.session_code().unwrap().to_string();
        machine.set_entered_code(code);
        machine.verify();
        assert_eq!(
            machine.redirect_target("x.com").as_deref(),
            Some("https://x.com/alice")
        );

        // Starting a logout withdraws the redirect.
        assert!(machine.begin_sign_out());
        assert_eq!(machine.redirect_target("x.com"), None);
    }

    #[test]
    fn test_redirect_target_needs_display_name() {
        let mut machine = LoginMachine::new();
        machine.begin_sign_in();
        machine.finish_sign_in(Ok(Profile::new("uid-anon", "")));
        let code = machine.session_code().unwrap().to_string();
        machine.set_entered_code(code);
        machine.verify();

        assert_eq!(machine.stage(), Stage::Verified);
        assert_eq!(machine.redirect_target("x.com"), None);
    }

    #[test]
    fn test_stage_is_always_one_of_three() {
        let machines = [
            LoginMachine::new(),
            signed_in(),
            verified(),
            {
                let mut m = verified();
                m.begin_sign_out();
                m.finish_sign_out(Ok(()));
                m
            },
        ];
        let expected = [
            Stage::SignedOut,
            Stage::AwaitingVerification,
            Stage::Verified,
            Stage::SignedOut,
        ];
        for (machine, stage) in machines.iter().zip(expected) {
            assert_eq!(machine.stage(), stage);
            assert_eq!(machine.profile().is_some(), stage != Stage::SignedOut);
            assert_eq!(machine.is_verified(), stage == Stage::Verified);
        }
    }
}
