use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use tokio::task::JoinHandle;
use crate::config::{PresenterConfig, RacePolicy};
use crate::markup::{Element, Node};
use crate::page::{DisplayRegion, Page, Trigger};
use crate::user::UserRecord;
use crate::UserClient;

/// Binds the triggers of a page to a [`UserClient`] and renders the outcome of every click
/// into the user and error [`DisplayRegion`]s.
#[derive(Debug, Clone)]
pub struct Presenter {
    client: UserClient,
    triggers: Vec<Trigger>,
    user_region: DisplayRegion,
    error_region: DisplayRegion,
    failure_message: Rc<str>,
    missing_data_message: Rc<str>,
    race_policy: RacePolicy,
    // Incremented on every click, used to detect stale fetches
    latest_click: Rc<Cell<u64>>,
}

impl Presenter {

    pub fn new(
        client: UserClient,
        triggers: Vec<Trigger>,
        user_region: DisplayRegion,
        error_region: DisplayRegion,
        config: &PresenterConfig,
    ) -> Self {
        Self {
            client,
            triggers,
            user_region,
            error_region,
            failure_message: config.failure_message.as_str().into(),
            missing_data_message: config.missing_data_message.as_str().into(),
            race_policy: config.race_policy,
            latest_click: Default::default(),
        }
    }

    /// Looks up the triggers and both display regions on the `page`. \
    /// Fails if a region can not be found.
    pub fn from_page(client: UserClient, page: &Page, config: &PresenterConfig) -> anyhow::Result<Self> {
        let triggers = page.triggers(&config.trigger_selector, &config.url_attribute)?;
        let user_region = page.region(&config.user_region_selector)?;
        let error_region = page.region(&config.error_region_selector)?;
        verbose!(debug, "Bound {} triggers", triggers.len());
        Ok(Self::new(client, triggers, user_region, error_region, config))
    }

    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    pub fn trigger(&self, index: usize) -> Option<&Trigger> {
        self.triggers.get(index)
    }

    pub fn user_region(&self) -> &DisplayRegion {
        &self.user_region
    }

    pub fn error_region(&self) -> &DisplayRegion {
        &self.error_region
    }

    /// Handles a click on `trigger`. \
    /// Both regions are cleared right away, the returned future fetches the user and renders the result.
    pub fn click(&self, trigger: &Trigger) -> impl Future<Output = ()> + 'static {
        self.user_region.clear();
        self.error_region.clear();
        let click_id = self.latest_click.get() + 1;
        self.latest_click.set(click_id);

        let presenter = self.clone();
        let url = trigger.url.clone();
        async move {
            let result = presenter.client.fetch_user(&url).await;
            if presenter.is_stale(click_id) {
                verbose!(debug, "Discarding stale response for {}", url);
                return;
            }
            match result {
                Ok(Some(user)) => presenter.show_user(&user),
                Ok(None) => {
                    verbose!(warn, "Response from {} has no user data", url);
                    presenter.show_failure(&presenter.missing_data_message);
                }
                Err(err) => {
                    verbose!(warn, "Could not fetch user: {:?}", err);
                    presenter.show_failure(&err.to_string());
                }
            }
        }
    }

    /// Same as [`Presenter::click()`], but runs the fetch as a task on the current [`tokio::task::LocalSet`]
    pub fn spawn_click(&self, trigger: &Trigger) -> JoinHandle<()> {
        tokio::task::spawn_local(self.click(trigger))
    }

    fn is_stale(&self, click_id: u64) -> bool {
        match self.race_policy {
            RacePolicy::LastSettledWins => false,
            RacePolicy::LatestClickWins => self.latest_click.get() != click_id,
        }
    }

    fn show_user(&self, user: &UserRecord) {
        let name = user.display_name();
        self.user_region.replace(vec![
            Element::new("h2").child(Node::text(name.clone())).into(),
            Element::new("img")
                .attr("alt", name)
                .attr("src", user.avatar.clone())
                .into(),
        ]);
        self.error_region.clear();
    }

    fn show_failure(&self, error_text: &str) {
        self.user_region.replace(vec![Node::text(&*self.failure_message)]);
        self.error_region.replace(vec![Node::text(error_text)]);
    }

}
