use std::time::Duration;

use reqwest::{Client, redirect};
use tracing::{debug, warn};

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::models::Movie;
use crate::parser;

/// Downloads product pages and turns them into movies.
///
/// Cloning is cheap: the underlying client shares its connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        let max_redirects = config.max_redirects;
        let redirect_policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() >= max_redirects {
                attempt.error(format!("Too many redirects (>{max_redirects})"))
            } else {
                attempt.follow()
            }
        });

        let mut builder = Client::builder()
            .redirect(redirect_policy)
            .user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn product_url(&self, amazon_id: &str) -> String {
        format!("{}{}", self.base_url, amazon_id)
    }

    /// Fetches the product page for `amazon_id` and scrapes it.
    ///
    /// Only a failed request or an unreadable body is an error. The upstream
    /// status code is ignored, and a page that lacks the expected layout
    /// comes back as an empty [`Movie`].
    pub async fn fetch_movie(&self, amazon_id: &str) -> Result<Movie, FetchError> {
        let url = self.product_url(amazon_id);
        debug!(%url, "fetching product page");

        let resp = self.client.get(&url).send().await.map_err(|source| {
            warn!(%url, error = %source, "product page request failed");
            FetchError::Request {
                id: amazon_id.to_string(),
                source,
            }
        })?;
        debug!(%url, status = %resp.status(), "product page response");

        let html = resp.text().await.map_err(|source| {
            warn!(%url, error = %source, "could not read product page");
            FetchError::Body {
                id: amazon_id.to_string(),
                source,
            }
        })?;

        Ok(parser::parse_movie(&html))
    }
}
