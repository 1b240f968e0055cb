//! The account confirmation view.
//!
//! The view knows nothing about actix: it reads its token through a [`TokenSource`],
//! leaves through a [`Navigator`] and talks to the backend through an [`ApiClient`].

use {
    crate::{
        api_client::{ActivationResult, ApiClient},
        domain::ActivationToken,
        utils::error_chain_fmt,
    },
    reqwest::StatusCode,
    std::sync::{Arc, Mutex, PoisonError},
};

/// Where the user is sent once the account is active.
pub const HOME_PATH: &str = "/";

/// Reads the token out of the current navigational context.
pub trait TokenSource {
    fn current_token(&self) -> Option<String>;
}

/// Moves the user somewhere else.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    Idle,
    Pending,
    NavigatedAway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The backend accepted the token and the user was sent home.
    Activated,
    /// The backend answered with a non-2xx status. Nothing else happened.
    Rejected(StatusCode),
    /// No request was sent because the view was not idle.
    Ignored(ConfirmationState),
}

#[derive(thiserror::Error)]
pub enum ConfirmError {
    #[error("Failed to reach the activation endpoint.")]
    Transport(#[source] reqwest::Error),
}

impl std::fmt::Debug for ConfirmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct ConfirmationView<N> {
    token: ActivationToken,
    api_client: Arc<ApiClient>,
    navigator: N,
    state: Mutex<ConfirmationState>,
}

impl<N: Navigator> ConfirmationView<N> {
    pub fn new(token_source: &impl TokenSource, api_client: Arc<ApiClient>, navigator: N) -> Self {
        Self {
            token: ActivationToken::from_route(token_source.current_token()),
            api_client,
            navigator,
            state: Mutex::new(ConfirmationState::Idle),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn state(&self) -> ConfirmationState {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_state(&self, state: ConfirmationState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = state;
    }

    /// Flip `Idle` to `Pending`. Returns the current state if the view was not idle.
    fn begin(&self) -> Result<(), ConfirmationState> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match *state {
            ConfirmationState::Idle => {
                *state = ConfirmationState::Pending;
                Ok(())
            }
            other => Err(other),
        }
    }

    /// Send the token to the backend and go home if it was accepted.
    ///
    /// A rejection is logged and leaves the view idle so the user can press again.
    /// Failing to get any response is handed back to the caller.
    #[tracing::instrument(name = "Confirm a pending account", skip(self))]
    pub async fn confirm(&self) -> Result<ConfirmOutcome, ConfirmError> {
        if let Err(state) = self.begin() {
            tracing::debug!(?state, "Confirmation already in flight or done");
            return Ok(ConfirmOutcome::Ignored(state));
        }

        match self.api_client.activate_user(&self.token).await {
            Ok(ActivationResult::Activated) => {
                self.set_state(ConfirmationState::NavigatedAway);
                self.navigator.navigate(HOME_PATH);
                Ok(ConfirmOutcome::Activated)
            }
            Ok(ActivationResult::Rejected(status)) => {
                self.set_state(ConfirmationState::Idle);
                tracing::error!(status = %status, "Failed to confirm token");
                Ok(ConfirmOutcome::Rejected(status))
            }
            Err(e) => {
                self.set_state(ConfirmationState::Idle);
                Err(ConfirmError::Transport(e))
            }
        }
    }

    /// Render the page for the current state.
    ///
    /// The button is only disabled when rendering while a confirmation is in flight.
    /// The web layer builds one view per request and renders once `confirm()` has
    /// returned, so pages served over HTTP always carry an enabled button.
    pub fn render(&self) -> String {
        let disabled = match self.state() {
            ConfirmationState::Idle => "",
            _ => " disabled",
        };
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta http-equiv="content-type" content="text/html; charset=utf-8">
    <title>Confirmation</title>
</head>
<body>
    <div>
        <h1>Confirmation</h1>
        <form action="{action}" method="post">
            <button type="submit"{disabled}>Click to confirm</button>
        </form>
    </div>
</body>
</html>"#,
            action = htmlescape::encode_minimal(&confirmation_path(&self.token)),
            disabled = disabled,
        )
    }
}

/// The page path for `token`, `/confirm` when the token is empty.
pub fn confirmation_path(token: &ActivationToken) -> String {
    if token.is_empty() {
        "/confirm".to_string()
    } else {
        format!("/confirm/{}", token.as_path_segment())
    }
}
