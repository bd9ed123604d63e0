use http::StatusCode;

use std::fmt;

/// A failed match attempt.
///
/// ```
/// use http::Method;
/// use pathmux::{MatchError, Route, Table};
///
/// let table = Table::compile([Route::get("/home", "Welcome!")]);
///
/// // no route matches the path
/// assert_eq!(table.at(&Method::GET, "/foobar").unwrap_err(), MatchError::NotFound);
///
/// // the path matches, but not for this method
/// assert_eq!(table.at(&Method::POST, "/home").unwrap_err(), MatchError::MethodNotAllowed);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MatchError {
    /// No route was registered for the path.
    NotFound,
    /// A route was registered for the path, but not for the requested method.
    MethodNotAllowed,
}

impl MatchError {
    /// The status code sent to the client for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// The plain-text body sent to the client for this error.
    pub fn body(&self) -> &'static str {
        match self {
            Self::NotFound => "Path not found\n",
            Self::MethodNotAllowed => "Method not allowed\n",
        }
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "no route registered for path"),
            Self::MethodNotAllowed => write!(f, "route registered for path, but not for method"),
        }
    }
}

impl std::error::Error for MatchError {}
