//! Client configuration and the per-store handle that exposes every endpoint.

use std::{fmt, sync::Arc};

use url::Url;

use crate::{
    endpoint::{Call, Endpoint},
    transport::{Executor, ReqwestExecutor},
    types::StoreID,
    Error,
};

/// Production API base.
pub const DEFAULT_BASE_URL: &str = "https://app.ecwid.com/api/v3";

/// Client for the Ecwid REST API v3.
///
/// Holds the API base URL and the transport. The client itself is
/// stateless: bind a store and token with [`Client::store`] to get at the
/// endpoint methods. Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    executor: Arc<dyn Executor>,
}

impl Client {
    /// Creates a client for the production API using [`ReqwestExecutor`].
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::builder().base_url(base_url).build()
    }

    /// Creates a production client that sends every call through `executor`.
    pub fn with_executor(executor: impl Executor + 'static) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            executor: Arc::new(executor),
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn executor(&self) -> Arc<dyn Executor> {
        Arc::clone(&self.executor)
    }

    /// Binds a store id and OAuth token. An empty token is not sent.
    pub fn store(&self, store_id: StoreID, token: impl Into<String>) -> Store<'_> {
        Store {
            client: self,
            store_id,
            token: token.into(),
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`] with a custom base URL and/or transport.
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    executor: Option<Arc<dyn Executor>>,
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn executor(mut self, executor: impl Executor + 'static) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Validates the base URL and creates the default transport if none
    /// was given.
    pub fn build(self) -> Result<Client, Error> {
        let base_url = match self.base_url {
            Some(base_url) => {
                Url::parse(&base_url).map_err(|e| {
                    tracing::error!("Invalid base URL {}: {}", base_url, e);
                    Error::InvalidBaseUrl(e)
                })?;
                base_url.trim_end_matches('/').to_string()
            }
            None => DEFAULT_BASE_URL.to_string(),
        };
        let executor = match self.executor {
            Some(executor) => executor,
            None => Arc::new(ReqwestExecutor::new()?),
        };
        Ok(Client { base_url, executor })
    }
}

/// Endpoint methods for one store, authenticated with one token.
///
/// Every method validates its arguments and returns a
/// [`crate::PendingRequest`]; call `execute()` on it to perform the request.
/// Missing required arguments (zero ids, empty strings, empty uploads) fail
/// with [`Error::IllegalArgument`] before anything is sent.
pub struct Store<'a> {
    client: &'a Client,
    store_id: StoreID,
    token: String,
}

impl Store<'_> {
    pub fn store_id(&self) -> StoreID {
        self.store_id
    }

    pub(crate) fn call(&self, endpoint: &'static Endpoint) -> Call<'_> {
        Call::new(self.client, endpoint, self.store_id, &self.token)
    }
}

impl fmt::Debug for Store<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("store_id", &self.store_id)
            .finish_non_exhaustive()
    }
}
