//! HTTP client that performs API requests.

use std::time::Duration;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::form_urlencoded;

use crate::constants::{ROOT, USER_AGENT};
use crate::endpoint;
use crate::error::Error;
use crate::params::Params;
use crate::wrapper::{parse_wrapper, Wrapper};

/// Request timeout for clients built by [`Client::new`].
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared client behind the crate-level [`request`] shortcut,
/// initialized once on first use and read-only afterwards.
static DEFAULT_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// A configured API client.
///
/// Immutable once built; clone freely across tasks. Timeouts, proxies,
/// and connection pooling belong to the underlying `reqwest` transport.
/// Fields are public so callers can override selectively:
///
/// ```
/// use stackexchange_client::client::Client;
///
/// let client = Client {
///     key: Some("app-key".to_string()),
///     ..Client::new()
/// };
/// # drop(client);
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// HTTP transport used for every request.
    pub http: reqwest::Client,
    /// API root, including the version segment.
    pub root: String,
    /// OAuth 2.0 access token, sent as `access_token` when present.
    pub access_token: Option<String>,
    /// Registered application key, sent as `key` when present.
    pub key: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Client with a default transport and the official API root.
    #[must_use]
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");
        Self::with_http(http)
    }

    /// Client using a caller-supplied transport.
    #[must_use]
    pub fn with_http(http: reqwest::Client) -> Self {
        Self {
            http,
            root: ROOT.to_string(),
            access_token: None,
            key: None,
        }
    }

    /// Perform an API request.
    ///
    /// `path` is an endpoint template (see [`crate::endpoint`]); its
    /// placeholders are filled from `params.args`. The response
    /// wrapper's `items` are decoded into `T`, typically a `Vec` of one
    /// of the [`crate::models`] types.
    ///
    /// The HTTP status line is not consulted: the API reports failures
    /// inside the wrapper, so an error response decodes `Ok` with
    /// [`Wrapper::error`] populated.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] when the HTTP round trip fails, with no
    /// wrapper available; [`Error::Decode`] when the body does not
    /// decode, carrying whatever wrapper metadata was parsed.
    pub async fn request<T>(&self, path: &str, params: &Params) -> Result<(Wrapper, T), Error>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.request_url(path, params);
        debug!(path, site = %params.site, "API request");

        let response = self.http.get(&url).send().await?;
        let body = response.text().await?;
        parse_wrapper(&body)
    }

    /// Build the full request URL: root + filled path + encoded query.
    fn request_url(&self, path: &str, params: &Params) -> String {
        let path = endpoint::fill_placeholders(path, &params.args);

        let mut pairs = params.query_pairs();
        if let Some(token) = &self.access_token {
            pairs.push(("access_token", token.clone()));
        }
        if let Some(key) = &self.key {
            pairs.push(("key", key.clone()));
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &pairs {
            query.append_pair(name, value);
        }
        format!("{}{}?{}", self.root, path, query.finish())
    }
}

/// Perform an API request with the shared default client.
///
/// Equivalent to [`Client::request`] on a never-configured client:
/// default transport, official root, no credentials.
///
/// # Errors
///
/// Same contract as [`Client::request`].
pub async fn request<T>(path: &str, params: &Params) -> Result<(Wrapper, T), Error>
where
    T: DeserializeOwned + Default,
{
    DEFAULT_CLIENT.request(path, params).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Order, Sort};

    #[test]
    fn test_request_url_fills_path_and_query() {
        let client = Client {
            root: "http://localhost:8000".to_string(),
            ..Client::new()
        };
        let params = Params {
            site: "stackoverflow".to_string(),
            sort: Some(Sort::Score),
            order: Some(Order::Desc),
            page_size: 1,
            args: vec!["42".to_string()],
            ..Params::default()
        };
        assert_eq!(
            client.request_url(endpoint::QUESTION_ANSWERS, &params),
            "http://localhost:8000/questions/42/answers?site=stackoverflow&sort=votes&order=desc&pagesize=1"
        );
    }

    #[test]
    fn test_request_url_percent_encodes_values() {
        let client = Client {
            root: "http://localhost:8000".to_string(),
            ..Client::new()
        };
        let params = Params {
            site: "sci fi".to_string(),
            filter: "!-u2CTCBE".to_string(),
            ..Params::default()
        };
        assert_eq!(
            client.request_url(endpoint::QUESTIONS, &params),
            "http://localhost:8000/questions?site=sci+fi&filter=%21-u2CTCBE"
        );
    }

    #[test]
    fn test_request_url_appends_credentials_when_configured() {
        let client = Client {
            root: "http://localhost:8000".to_string(),
            access_token: Some("tok".to_string()),
            key: Some("app".to_string()),
            ..Client::new()
        };
        let url = client.request_url(endpoint::QUESTIONS, &Params::default());
        assert_eq!(
            url,
            "http://localhost:8000/questions?site=&access_token=tok&key=app"
        );
    }

    #[test]
    fn test_default_client_uses_official_root() {
        let client = Client::new();
        assert_eq!(client.root, ROOT);
        assert_eq!(client.access_token, None);
        assert_eq!(client.key, None);
    }
}
