use crate::error::{FetchError, ParseFailure};
use crate::user::{ResponseEnvelope, UserRecord};
use crate::UserClient;

impl UserClient {

    /// Fetches a [`UserRecord`] from `url` with a single GET request. \
    /// Fails with a network error if the status is not a success (the body is not read in that case),
    /// and with a parse error if the body is not json. \
    /// Returns `None`, if the json has no usable `data` field.
    pub async fn fetch_user(&self, url: &str) -> Result<Option<UserRecord>, FetchError> {
        let url = self.resolve(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        verbose!(debug, "get: {}", url.as_str());
        let response = self.client.get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { source })?;
        let status = response.status();
        if !status.is_success() {
            verbose!(warn, "Fetch failed with status code: {}", status);
            return Err(FetchError::Status { status });
        }
        let body = response.bytes().await.map_err(ParseFailure::Body)?;
        let json: serde_json::Value = serde_json::from_slice(&body).map_err(ParseFailure::Json)?;
        Ok(ResponseEnvelope::from_json(&json).data)
    }

}
