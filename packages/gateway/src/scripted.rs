use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{AuthGateway, GatewayError, Profile};

#[derive(Debug, Default)]
struct Script {
    sign_ins: VecDeque<Result<Profile, GatewayError>>,
    sign_outs: VecDeque<Result<(), GatewayError>>,
    sign_in_calls: usize,
    sign_out_calls: usize,
}

/// In-memory AuthGateway for tests and offline previews.
///
/// Responses are queued ahead of time and handed out in order. An empty
/// sign-in queue fails with [`GatewayError::Unscripted`]; an empty sign-out
/// queue succeeds.
#[derive(Clone, Debug, Default)]
pub struct ScriptedGateway {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next unanswered `sign_in` call.
    pub fn push_sign_in(&self, result: Result<Profile, GatewayError>) -> &Self {
        self.script.lock().unwrap().sign_ins.push_back(result);
        self
    }

    /// Queue the result of the next unanswered `sign_out` call.
    pub fn push_sign_out(&self, result: Result<(), GatewayError>) -> &Self {
        self.script.lock().unwrap().sign_outs.push_back(result);
        self
    }

    pub fn sign_in_calls(&self) -> usize {
        self.script.lock().unwrap().sign_in_calls
    }

    pub fn sign_out_calls(&self) -> usize {
        self.script.lock().unwrap().sign_out_calls
    }
}

#[async_trait(?Send)]
impl AuthGateway for ScriptedGateway {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    async fn sign_in(&self) -> Result<Profile, GatewayError> {
        let mut script = self.script.lock().unwrap();
        script.sign_in_calls += 1;
        script
            .sign_ins
            .pop_front()
            .unwrap_or(Err(GatewayError::Unscripted("sign_in")))
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        let mut script = self.script.lock().unwrap();
        script.sign_out_calls += 1;
        script.sign_outs.pop_front().unwrap_or(Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_responses_in_order() {
        let gateway = ScriptedGateway::new();
        gateway
            .push_sign_in(Ok(Profile::new("u1", "alice")))
            .push_sign_in(Err(GatewayError::PopupClosed));

        assert_eq!(gateway.sign_in().await.unwrap().display_name, "alice");
        assert_eq!(gateway.sign_in().await, Err(GatewayError::PopupClosed));
        assert_eq!(
            gateway.sign_in().await,
            Err(GatewayError::Unscripted("sign_in"))
        );
        assert_eq!(gateway.sign_in_calls(), 3);
    }

    #[tokio::test]
    async fn test_sign_out_defaults_to_success() {
        let gateway = ScriptedGateway::new();
        gateway.push_sign_out(Err(GatewayError::Network("offline".to_string())));

        assert!(gateway.sign_out().await.is_err());
        assert!(gateway.sign_out().await.is_ok());
        assert_eq!(gateway.sign_out_calls(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let gateway = ScriptedGateway::new();
        let handle = gateway.clone();
        handle.push_sign_in(Ok(Profile::new("u2", "bob")));

        let profile = gateway.sign_in().await.unwrap();
        assert_eq!(profile.uid, "u2");
        assert_eq!(handle.sign_in_calls(), 1);
    }
}
