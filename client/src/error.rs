use serde_json::Value;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

/// Normalized error produced by the transport layer. Application code only
/// ever sees this shape; the underlying transport failure never crosses the
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status of the response, or 0 if no response arrived.
    pub status_code: u16,
    pub message: String,
    /// Server body for failures that carried one.
    pub raw_body: Option<Value>,
    /// True when the request never reached a server.
    pub is_network_error: bool,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status_code == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "HTTP {}: {}", self.status_code, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// The request was sent but no response came back (includes timeouts).
    pub fn network() -> Self {
        Self {
            status_code: 0,
            message: NETWORK_ERROR_MESSAGE.to_string(),
            raw_body: None,
            is_network_error: true,
        }
    }

    /// The server answered with a failure status, or a 2xx body that
    /// declared `success: false`.
    pub fn http(status: u16, server_message: Option<String>, raw_body: Option<Value>) -> Self {
        let message = server_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| status_message(status));
        Self {
            status_code: status,
            message,
            raw_body,
            is_network_error: false,
        }
    }

    /// The request could not be constructed or dispatched at all.
    pub fn config(description: impl std::fmt::Display) -> Self {
        let description = description.to_string();
        Self {
            status_code: 0,
            message: if description.is_empty() {
                "Request configuration error".to_string()
            } else {
                description
            },
            raw_body: None,
            is_network_error: false,
        }
    }

    pub fn is_auth(&self) -> bool {
        self.status_code == 401 || self.status_code == 403
    }

    /// Returns true if retrying the request later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        self.is_network_error || self.status_code == 429 || self.status_code >= 500
    }

    /// Pure auth-failure decision. The effectful part (clearing credentials,
    /// navigating) lives in the session boundary so this stays testable
    /// without a navigation environment.
    pub fn auth_action(&self, current_path: &str) -> AuthAction {
        match self.status_code {
            401 => AuthAction::Login {
                return_to: format!("/login?redirect={}", encode_component(current_path)),
            },
            403 => AuthAction::Forbidden,
            _ => AuthAction::None,
        }
    }
}

impl From<wreq::header::InvalidHeaderValue> for ApiError {
    fn from(e: wreq::header::InvalidHeaderValue) -> Self {
        ApiError::config(format!("Invalid header value: {}", e))
    }
}

/// What the application should do about an auth failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    None,
    /// Clear stored credentials and send the user to the login route,
    /// carrying the interrupted path as a return target.
    Login { return_to: String },
    /// Send the user to the forbidden route.
    Forbidden,
}

/// Static status-to-message table used when the server did not provide a
/// message of its own.
pub fn status_message(status: u16) -> String {
    match status {
        400 => "Invalid request".to_string(),
        401 => "Session expired - please login again".to_string(),
        403 => "You don't have permission for this action".to_string(),
        404 => "Resource not found".to_string(),
        500 => "Server error".to_string(),
        503 => "Service unavailable".to_string(),
        _ => format!("HTTP error {}", status),
    }
}

/// Percent-encode a string for use as a query parameter value. Unreserved
/// characters (RFC 3986) pass through, everything else is %-escaped.
fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{:02X}", byte));
            }
        }
    }
    out
}
