// Logs through the `log` facade, but only when the `verbose` feature is enabled
// Defined before the modules, so it is in scope in all of them
macro_rules! verbose {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "verbose")]
        {
            log::$level!($($arg)+);
        }
    }};
}

pub mod config;
pub mod error;
pub mod fetcher;
pub mod markup;
pub mod page;
pub mod presenter;
pub mod user;

use std::time::Duration;
use anyhow::Context;
use reqwest::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use url::Url;

pub use config::{ClientConfig, PresenterConfig, RacePolicy};
pub use error::{FetchError, FetchErrorKind, ParseFailure};
pub use markup::Node;
pub use page::{DisplayRegion, Page, Trigger};
pub use presenter::Presenter;
pub use user::{ResponseEnvelope, UserRecord};

/// A wrapped reqwest [`Client`], that resolves relative urls against the location of the page
#[derive(Debug, Clone, Default)]
pub struct UserClient {
    pub client: Client,
    pub base_url: Option<Url>,
}

impl UserClient {

    /// Builds a client from a [`ClientConfig`]
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let base_url = config.base_url.as_deref()
            .map(Url::parse)
            .transpose()
            .context("Could not parse base url")?;
        Ok(Self {
            client: Self::make_client(config)?,
            base_url,
        })
    }

    fn make_client(config: &ClientConfig) -> anyhow::Result<Client> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).context("User agent is not a valid header value")?
        );
        let mut builder = ClientBuilder::new()
            .https_only(config.https_only)
            .cookie_store(true)
            .default_headers(default_headers)
            .gzip(true);
        // Unlimited unless configured, a fetch runs to completion or failure
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        builder.build().context("Could not build reqwest client")
    }

    /// Resolves `url` against the base url, if there is one
    pub fn resolve(&self, url: &str) -> Result<Url, url::ParseError> {
        Url::options()
            .base_url(self.base_url.as_ref())
            .parse(url)
    }

}
