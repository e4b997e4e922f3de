//! The admin gate.
//!
//! This is a convenience check, not access control: the only inputs are a
//! client-held flag and an optional credential pair compared against a single
//! configured pair. Anyone who can set the flag passes.

use actix_web::cookie::Cookie;
use serde::Deserialize;

/// Name of the flag (cookie) that marks a session as admitted.
pub const AUTH_FLAG: &str = "isAuthenticated";

/// Where rejected requests are sent.
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// What the client presented with a request.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Raw value of the `isAuthenticated` flag, if any.
    pub flag: Option<String>,
    /// Credential pair stored client-side at login, if any.
    pub credentials: Option<Credentials>,
}

impl SessionContext {
    pub fn is_flagged(&self) -> bool {
        self.flag.as_deref() == Some("true")
    }
}

/// Decides whether a credential pair is acceptable.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> bool;
}

/// Accepts exactly one configured pair, or nothing when none is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    pair: Option<Credentials>,
}

impl StaticCredentials {
    pub fn new(pair: Option<Credentials>) -> Self {
        Self { pair }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> bool {
        self.pair.as_ref() == Some(credentials)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The flag was already set.
    Allow,
    /// Credentials matched; the caller should set the flag.
    AllowAndSetFlag,
    RedirectToLogin,
}

pub fn check(session: &SessionContext, verifier: &dyn CredentialVerifier) -> GateDecision {
    if session.is_flagged() {
        return GateDecision::Allow;
    }

    match &session.credentials {
        Some(credentials) if verifier.verify(credentials) => GateDecision::AllowAndSetFlag,
        _ => GateDecision::RedirectToLogin,
    }
}

/// Cookie that sets the flag for the rest of the browser session.
pub fn flag_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(AUTH_FLAG, "true");
    cookie.set_path("/");
    cookie
}

/// Cookie that clears the flag.
pub fn clear_flag_cookie() -> Cookie<'static> {
    let mut cookie = flag_cookie();
    cookie.make_removal();
    cookie
}
