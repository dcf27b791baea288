use crate::classification::domain::error::ClassifyError;
use crate::classification::domain::result::{ClassificationResult, ResultSet};
use crate::shared::constants::NO_CLASSIFICATION_MESSAGE;
use crate::validation::UrlField;

/// Where one validate → submit → resolve cycle stands.
///
/// One value at a time; entering a state replaces the previous one wholesale,
/// so a stale error can never sit next to a fresh result.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(ResultSet),
    Failed(String),
}

/// The submission controller: owns the URL field and the session state, and
/// guards the submit transition.
///
/// The controller never issues the network request itself; callers take the
/// URL handed back by [`Session::begin_submit`], run the transport, and feed
/// the outcome to [`Session::complete`]. The network call is the only
/// suspension point, and it lives at the caller.
#[derive(Debug, Clone, Default)]
pub struct Session {
    url: UrlField,
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_field(&self) -> &UrlField {
        &self.url
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SessionState::Submitting
    }

    /// Whether the submit control should be enabled: nothing in flight, a
    /// non-empty value, and no live field error.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && !self.url.value().is_empty()
            && self.url.validity_error().is_none()
    }

    pub fn results(&self) -> Option<&[ClassificationResult]> {
        match &self.state {
            SessionState::Succeeded(results) => Some(results),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Edit handler for the URL input. Runs on every keystroke.
    pub fn edit_url(&mut self, raw: impl Into<String>) {
        self.url.edit(raw);
    }

    /// Submit guard. Returns the URL to send when the transition to
    /// `Submitting` is taken, clearing any previous error or result set
    /// before the network call resolves.
    ///
    /// A submit while a request is in flight is a no-op; a validation
    /// failure stays in place and surfaces the message on the field.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting() {
            log::debug!("submit ignored: a request is already in flight");
            return None;
        }
        if let Err(error) = self.url.validate_for_submit() {
            log::debug!("submit rejected: {error}");
            self.url.surface(error);
            return None;
        }
        self.state = SessionState::Submitting;
        Some(self.url.value().to_owned())
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Ignored unless a request is actually in flight, which drops late
    /// responses arriving after the session was torn down or reset.
    pub fn complete(&mut self, outcome: Result<ResultSet, ClassifyError>) {
        if !self.is_submitting() {
            log::debug!("dropping stale classification response");
            return;
        }
        self.state = match outcome {
            Ok(results) if results.is_empty() => {
                log::warn!("backend returned an empty result set");
                SessionState::Failed(NO_CLASSIFICATION_MESSAGE.to_owned())
            }
            Ok(results) => SessionState::Succeeded(results),
            Err(error) => {
                log::warn!("classification failed: {error}");
                SessionState::Failed(error.to_string())
            }
        };
    }

    /// Dismiss the error banner. Clears the message and nothing else.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, SessionState::Failed(_)) {
            self.state = SessionState::Idle;
        }
    }
}
