use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the API [`Client`](crate::Client).
///
/// Every variant is displayed with the `fourchan: ` prefix; the underlying
/// cause stays reachable through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its body could not be read.
    #[error("fourchan: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was not valid JSON for the expected record.
    #[error("fourchan: {0}")]
    Decode(#[source] serde_json::Error),

    /// The server answered with something other than `200 OK`.
    #[error("fourchan: unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    /// The request was abandoned because its cancellation token fired.
    #[error("fourchan: request cancelled")]
    Cancelled,

    /// The client could not be constructed.
    #[error("fourchan: could not start up the client: {0}")]
    ClientFormation(#[source] reqwest::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as _;

    #[test]
    fn decode_error_keeps_prefix_and_source() {
        let cause = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::from(cause);

        assert!(err.to_string().starts_with("fourchan: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn status_error_names_the_code() {
        let err = Error::UnexpectedStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "fourchan: unexpected status code: 404 Not Found"
        );
    }
}
