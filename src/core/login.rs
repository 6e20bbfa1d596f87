//! Login form state
//!
//! [`LoginState`] owns the two controlled inputs, the last error and the
//! submission phase. It has no DOM dependency so the view stays a thin
//! layer of signals over it.

use super::error::LoginError;
use super::storage::TOKEN_KEY;
use super::token::AccessToken;

/// Relative endpoint credentials are posted to
pub const LOGIN_ENDPOINT: &str = "/login";

/// Route shown after a successful login
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Email and password as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Form fields as the endpoint expects them.
    /// The email goes out under `username`.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("username", self.email.as_str()),
            ("password", self.password.as_str()),
        ]
    }
}

/// The two inputs rendered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn input_type(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "current-password",
        }
    }
}

/// What to do with a submit while another request is pending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPolicy {
    /// Every submit issues a request; the last response to resolve wins
    #[default]
    AllowConcurrent,
    /// Ignore submits until the pending request resolves
    GuardInFlight,
}

/// Fixed wiring of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSettings {
    pub endpoint: &'static str,
    pub redirect_to: &'static str,
    pub token_key: &'static str,
    pub policy: SubmitPolicy,
}

impl Default for LoginSettings {
    fn default() -> Self {
        Self {
            endpoint: LOGIN_ENDPOINT,
            redirect_to: DASHBOARD_PATH,
            token_key: TOKEN_KEY,
            policy: SubmitPolicy::default(),
        }
    }
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Errored(LoginError),
    Succeeded,
}

/// Credentials captured at the moment of submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub credentials: Credentials,
}

/// What the view should do after a request resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Navigate(&'static str),
    Stay,
}

/// State behind the login form
#[derive(Debug, Clone, PartialEq)]
pub struct LoginState {
    credentials: Credentials,
    error: Option<LoginError>,
    phase: LoginPhase,
    in_flight: usize,
    settings: LoginSettings,
}

impl LoginState {
    pub fn new(settings: LoginSettings) -> Self {
        Self {
            credentials: Credentials::default(),
            error: None,
            phase: LoginPhase::Idle,
            in_flight: 0,
            settings,
        }
    }

    pub fn email(&self) -> &str {
        &self.credentials.email
    }

    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.credentials.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.credentials.password = value.into();
    }

    pub fn phase(&self) -> &LoginPhase {
        &self.phase
    }

    pub fn settings(&self) -> &LoginSettings {
        &self.settings
    }

    /// Last failure, kept until another failure replaces it
    pub fn error(&self) -> Option<&LoginError> {
        self.error.as_ref()
    }

    /// Message for the error line, `None` while nothing has failed
    pub fn error_text(&self) -> Option<&'static str> {
        self.error.as_ref().map(LoginError::user_message)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether the submit control should refuse input
    pub fn is_locked(&self) -> bool {
        self.settings.policy == SubmitPolicy::GuardInFlight && self.in_flight > 0
    }

    /// Start a submission. Empty fields are sent as-is.
    /// Returns `None` only when the policy guards an in-flight request.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.is_locked() {
            return None;
        }

        self.in_flight += 1;
        self.phase = LoginPhase::Submitting;

        Some(SubmitTicket {
            credentials: self.credentials.clone(),
        })
    }

    /// Apply the outcome of one request
    pub fn finish(&mut self, outcome: Result<AccessToken, LoginError>) -> Transition {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Ok(_) => {
                self.phase = LoginPhase::Succeeded;
                Transition::Navigate(self.settings.redirect_to)
            }
            Err(err) => {
                self.error = Some(err.clone());
                self.phase = if self.in_flight > 0 {
                    LoginPhase::Submitting
                } else {
                    LoginPhase::Errored(err)
                };
                Transition::Stay
            }
        }
    }
}

impl Default for LoginState {
    fn default() -> Self {
        Self::new(LoginSettings::default())
    }
}
