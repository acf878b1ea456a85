use std::fmt;

/// Errors returned by the property API client.
///
/// `NotFound` gets its own variant because callers treat "this listing does
/// not exist" differently from any other failed status. All other non-2xx
/// responses land in `Http`, carrying the backend's `message` field when the
/// error body was parseable JSON and `None` when it was not.
#[derive(Debug)]
pub enum ApiError {
    /// The backend returned 404 for the requested resource.
    NotFound,

    /// The backend returned a non-2xx status other than 404.
    Http {
        status: u16,
        reason: String,
        message: Option<String>,
    },

    /// The request never produced a response (connect, timeout, etc.).
    Transport(reqwest::Error),

    /// The response arrived but its body could not be decoded.
    Decode(String),
}

impl ApiError {
    /// Build the error for a non-success response, extracting the backend's
    /// structured `message` from the body on a best-effort basis.
    pub fn from_response(status: u16, reason: &str, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        ApiError::Http {
            status,
            reason: reason.to_string(),
            message: extract_message(body),
        }
    }
}

/// Pull the `message` field out of a JSON error body.
///
/// Returns `None` when the body is not valid JSON or carries no string
/// `message`; the caller then falls back to the generic status line.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(|s| s.to_string())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http {
                status,
                reason,
                message,
            } => match message {
                Some(msg) => write!(f, "{msg}"),
                None => write!(f, "HTTP {status}: {reason}"),
            },
            ApiError::Transport(err) => write!(f, "request failed: {err}"),
            ApiError::Decode(msg) => write!(f, "failed to decode response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err)
        }
    }
}
