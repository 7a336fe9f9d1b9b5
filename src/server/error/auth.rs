use thiserror::Error;

/// Authorization failures raised after identity resolution.
///
/// Identity resolution itself never fails a request; only the guard that requires an
/// identity (or a privilege on it) produces these.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token or session produced an identity for an endpoint that needs one.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication required")]
    Unauthorized,

    /// Identity is present but lacks a required privilege.
    ///
    /// Results in a 403 Forbidden response. The first field is the subject id and the
    /// second a server-side description of the denied action, neither of which is
    /// returned to the client.
    #[error("Subject {0} denied access: {1}")]
    Forbidden(String, String),
}
