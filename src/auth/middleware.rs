use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use std::future::{Ready, ready};
use std::sync::Arc;

use crate::auth::gate::{self, CredentialVerifier, Credentials, GateDecision, SessionContext};

/// Headers carrying the credential pair the admin UI stores at login.
pub const EMAIL_HEADER: &str = "x-admin-email";
pub const PASSWORD_HEADER: &str = "x-admin-password";

/// Extractor for admin handlers. Requests that fail the gate are answered
/// with `303 See Other` to the login screen before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    set_flag: bool,
}

impl AdminSession {
    /// Attach the flag cookie to the response when the request was admitted
    /// by credentials, so later requests pass on the flag alone.
    pub fn finish(&self, mut response: HttpResponse) -> HttpResponse {
        if self.set_flag {
            if let Err(e) = response.add_cookie(&gate::flag_cookie()) {
                tracing::warn!("Failed to set {} cookie: {e}", gate::AUTH_FLAG);
            }
        }
        response
    }
}

/// Read the flag cookie and the stored credential pair off a request.
pub fn session_from_request(req: &HttpRequest) -> SessionContext {
    let header_value = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    let credentials = match (header_value(EMAIL_HEADER), header_value(PASSWORD_HEADER)) {
        (Some(email), Some(password)) => Some(Credentials { email, password }),
        _ => None,
    };

    SessionContext {
        flag: req.cookie(gate::AUTH_FLAG).map(|c| c.value().to_string()),
        credentials,
    }
}

fn redirect_to_login() -> Error {
    let response = HttpResponse::SeeOther()
        .insert_header((header::LOCATION, gate::LOGIN_PATH))
        .finish();
    InternalError::from_response("admin gate", response).into()
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(verifier) = req.app_data::<web::Data<Arc<dyn CredentialVerifier>>>() else {
            return ready(Err(actix_web::error::ErrorInternalServerError(
                "Credential verifier not configured",
            )));
        };

        let session = session_from_request(req);
        let result = match gate::check(&session, verifier.get_ref().as_ref()) {
            GateDecision::Allow => Ok(AdminSession { set_flag: false }),
            GateDecision::AllowAndSetFlag => Ok(AdminSession { set_flag: true }),
            GateDecision::RedirectToLogin => {
                tracing::debug!("Admin gate redirecting {} to login", req.path());
                Err(redirect_to_login())
            }
        };

        ready(result)
    }
}
