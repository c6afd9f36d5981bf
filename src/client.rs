use std::time::Duration;

use crate::{
    error::Error,
    models::{
        board::{Board, BoardList},
        catalog::Page,
        thread::{FullThread, ThreadNo},
    },
    result::Result,
};
use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// Root of the read-only API.
pub const DEFAULT_BASE: &str = "https://a.4cdn.org";

const DEFAULT_USER_AGENT: &str = "FourchanClient/0.1";

/// Anything that can serve boards, catalogs and threads.
///
/// [`Client`] implements this over HTTP; the rendering layer only depends on
/// the trait.
#[async_trait]
pub trait Source: Send + Sync {
    /// Returns every board.
    async fn list_boards(&self) -> Result<Vec<Board>>;

    /// Returns the catalog pages of `board`.
    async fn get_catalog(&self, board: &str) -> Result<Vec<Page>>;

    /// Returns every post of thread `no` on `board`.
    async fn get_thread(&self, board: &str, no: ThreadNo) -> Result<FullThread>;
}

/// HTTP client for the API.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: ReqwestClient,
    base: String,
    user_agent: String,
    cancel: CancellationToken,
}

/// Configures a [`Client`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base: String,
    user_agent: String,
    timeout: Option<Duration>,
    use_proxy: bool,
    cancel: CancellationToken,
}

impl ClientBuilder {
    /// Starts from the public API root with no timeout.
    pub fn new() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            use_proxy: true,
            cancel: CancellationToken::new(),
        }
    }

    /// Sets the API root, e.g. a local mirror.
    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Bounds every request. Without it the transport default applies.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Ignores proxies configured through the environment.
    #[must_use]
    pub fn no_proxy(mut self) -> Self {
        self.use_proxy = false;
        self
    }

    /// Abandons in-flight and future requests once `token` is cancelled.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn build(self) -> Result<Client> {
        let mut http = ReqwestClient::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        if !self.use_proxy {
            http = http.no_proxy();
        }
        let http = http.build().map_err(Error::ClientFormation)?;

        Ok(Client {
            http,
            base: self.base,
            user_agent: self.user_agent,
            cancel: self.cancel,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client for the public API with default settings.
    pub fn new() -> Client {
        Client {
            http: ReqwestClient::new(),
            base: DEFAULT_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cancel: CancellationToken::new(),
        }
    }

    /// Returns a builder for a customised client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the API root this client talks to.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fetches every board from `boards.json`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers, or a body that does not decode.
    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        let url = format!("{}/boards.json", self.base);
        let list: BoardList = self.fetch_json(&url).await?;
        Ok(list.boards)
    }

    /// Fetches the catalog pages of `board`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers, or a body that does not decode.
    pub async fn get_catalog(&self, board: &str) -> Result<Vec<Page>> {
        let url = format!("{}/{board}/catalog.json", self.base);
        self.fetch_json(&url).await
    }

    /// Fetches thread `no` on `board`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers, or a body that does not decode.
    pub async fn get_thread(&self, board: &str, no: ThreadNo) -> Result<FullThread> {
        let url = format!("{}/{board}/thread/{no}.json", self.base);
        self.fetch_json(&url).await
    }

    pub(crate) async fn fetch_json<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => {
                log::debug!("request for {url} cancelled");
                Err(Error::Cancelled)
            }
            result = self.send_and_decode(url) => result,
        }
    }

    async fn send_and_decode<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        log::debug!("request for {url} dispatched");
        let response = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        log::debug!("response status: {}", response.status());
        match response.status() {
            StatusCode::OK => {}
            code => return Err(Error::UnexpectedStatus(code)),
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<T>(&body).map_err(Into::into)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Source for Client {
    async fn list_boards(&self) -> Result<Vec<Board>> {
        Client::list_boards(self).await
    }

    async fn get_catalog(&self, board: &str) -> Result<Vec<Page>> {
        Client::get_catalog(self, board).await
    }

    async fn get_thread(&self, board: &str, no: ThreadNo) -> Result<FullThread> {
        Client::get_thread(self, board, no).await
    }
}
