use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_USER_AGENT: &str = concat!("user_card/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_FAILURE_MESSAGE: &str = "Could not find user, try again tomorrow";
pub const DEFAULT_MISSING_DATA_MESSAGE: &str = "User data missing from response";

/// Settings for the [`UserClient`](crate::UserClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// The location of the page, relative trigger urls are resolved against it
    pub base_url: Option<String>,
    /// No timeout, if `None`
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
    pub https_only: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            https_only: false,
        }
    }
}

/// Decides what happens, when a fetch settles after a later click was made
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacePolicy {
    /// Every fetch renders when it settles, so the one settling last is shown
    #[default]
    LastSettledWins,
    /// Only the fetch of the most recent click renders, stale ones are dropped
    LatestClickWins,
}

/// Settings for the [`Presenter`](crate::Presenter) and the lookup of its elements on the [`Page`](crate::Page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub trigger_selector: String,
    /// The attribute on a trigger, that holds the url to fetch
    pub url_attribute: String,
    pub user_region_selector: String,
    pub error_region_selector: String,
    /// Shown in the user region on any failure
    pub failure_message: String,
    /// Shown in the error region, when a successful response carries no user data
    pub missing_data_message: String,
    pub race_policy: RacePolicy,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            trigger_selector: "button[data-url]".to_string(),
            url_attribute: "data-url".to_string(),
            user_region_selector: ".user".to_string(),
            error_region_selector: ".error".to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            missing_data_message: DEFAULT_MISSING_DATA_MESSAGE.to_string(),
            race_policy: RacePolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Could not parse client config")
    }
}

impl PresenterConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Could not parse presenter config")
    }
}
