use reqwest::StatusCode;
use thiserror::Error;

/// The two ways a fetch can fail, as seen by whoever displays the failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Network,
    Parse,
}

/// Why a response body could not be turned into json
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("invalid json: {0}")]
    Json(#[source] serde_json::Error),
}

/// An error returned by [`crate::UserClient::fetch_user()`] \
/// The display text is fixed per [`FetchErrorKind`], the details are kept in the fields.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status outside of 200-299
    #[error("Network error occurred")]
    Status { status: StatusCode },
    /// The request could not be sent or no response was received
    #[error("Network error occurred")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    #[error("Network error occurred")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Error parsing JSON")]
    Parse {
        #[source]
        source: ParseFailure,
    },
}

impl FetchError {

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Status { .. } | FetchError::Transport { .. } | FetchError::InvalidUrl { .. } => FetchErrorKind::Network,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
        }
    }

    /// The status code of the response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status { status } => Some(*status),
            FetchError::Transport { source } => source.status(),
            _ => None,
        }
    }

}

impl From<ParseFailure> for FetchError {
    fn from(source: ParseFailure) -> Self {
        FetchError::Parse { source }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use super::*;

    #[test]
    fn display_text_depends_only_on_kind() {
        let not_found = FetchError::Status { status: StatusCode::NOT_FOUND };
        let server_error = FetchError::Status { status: StatusCode::INTERNAL_SERVER_ERROR };
        assert_eq!(not_found.to_string(), "Network error occurred");
        assert_eq!(server_error.to_string(), "Network error occurred");
        assert_eq!(not_found.kind(), FetchErrorKind::Network);
        assert_eq!(not_found.status(), Some(StatusCode::NOT_FOUND));

        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let parse = FetchError::from(ParseFailure::Json(json_error));
        assert_eq!(parse.to_string(), "Error parsing JSON");
        assert_eq!(parse.kind(), FetchErrorKind::Parse);
        assert!(parse.status().is_none());
        assert!(parse.source().unwrap().to_string().starts_with("invalid json"));
    }

    #[test]
    fn invalid_url_is_a_network_error() {
        let source = url::Url::parse("relative/path").unwrap_err();
        let error = FetchError::InvalidUrl { url: "relative/path".to_string(), source };
        assert_eq!(error.kind(), FetchErrorKind::Network);
        assert_eq!(error.to_string(), "Network error occurred");
    }
}
