use thiserror::Error;

/// Store configuration problems. Fatal at startup, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing store configuration: {var} is not set")]
    Missing { var: &'static str },

    #[error("invalid store URL {url:?}: expected an http:// or https:// address")]
    InvalidUrl { url: String },
}

/// A read against the table store that did not produce rows.
///
/// Empty results are not errors; this covers only transport, status and
/// decoding failures so a page can tell an outage apart from "no rows".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("store responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short message suitable for the page body.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "We couldn't reach our catalog. Check your connection and try again.",
            FetchError::Status { status, .. } if *status >= 500 => {
                "Our catalog is temporarily unavailable. Please try again shortly."
            }
            FetchError::Status { .. } => "The catalog request was rejected.",
            FetchError::Decode(_) => "The catalog returned data we couldn't read.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cause() {
        let err = FetchError::Status {
            status: 503,
            body: "upstream".into(),
        };
        assert_eq!(err.to_string(), "store responded with HTTP 503: upstream");
        assert!(err.user_message().contains("temporarily unavailable"));

        let err = ConfigError::Missing { var: "SUPABASE_URL" };
        assert_eq!(
            err.to_string(),
            "missing store configuration: SUPABASE_URL is not set"
        );
    }

    #[test]
    fn test_client_errors_are_not_reported_as_outages() {
        let err = FetchError::Status {
            status: 401,
            body: String::new(),
        };
        assert_eq!(err.user_message(), "The catalog request was rejected.");
    }
}
