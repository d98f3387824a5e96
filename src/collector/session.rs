//! HTTP session shared by every request of a run

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::collector::error::CollectError;
use crate::collector::user_agent::random_user_agent;
use crate::config::CollectorConfig;

/// Raw response of a page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only `200 OK` counts; other 2xx answers are treated as failures
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }
}

/// Trait for retrieving pages over the network
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Issues a GET request for `url`
    ///
    /// # Returns
    /// * `Ok(Page)` - Any response the server produced, successful or not
    /// * `Err(CollectError)` - If the request could not be completed
    async fn get(&self, url: &str) -> Result<Page, CollectError>;
}

/// reqwest-backed session
///
/// Every request carries the same `User-Agent`, chosen once when the session
/// is built. Cookies set by the site are kept for the rest of the run.
pub struct HttpSession {
    client: Client,
    user_agent: String,
}

impl HttpSession {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, CollectError> {
        let mut builder = Client::builder().user_agent(user_agent).cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            user_agent: user_agent.to_string(),
        })
    }

    /// Builds a session using the configured `User-Agent`, or a random one from the pool
    pub fn from_config(config: &CollectorConfig) -> Result<Self, CollectError> {
        let user_agent = match config.user_agent.as_deref() {
            Some(user_agent) => user_agent,
            None => random_user_agent(),
        };
        Self::new(user_agent, config.timeout())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait::async_trait]
impl PageSource for HttpSession {
    async fn get(&self, url: &str) -> Result<Page, CollectError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(Page { status, body })
    }
}
