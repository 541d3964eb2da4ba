//! Gateway executor
//!
//! Runs the full pipeline behind the CLI: resolve the request, guard
//! the credential, dispatch to the matching adapter. Nothing touches
//! the network until resolution and the credential check have passed.

use tracing::info;

use crate::config::Settings;
use crate::credentials;
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::providers::{exa::Exa, serper::Serper, tavily::Tavily, Provider, SearchAdapter};
use crate::request::{resolve, RequestOverrides};
use crate::results::SearchResponse;

/// Per-provider base URL overrides, primarily for tests.
#[derive(Debug, Clone, Default)]
pub struct Endpoints {
    pub serper: Option<String>,
    pub tavily: Option<String>,
    pub exa: Option<String>,
}

/// One-shot search executor.
pub struct Gateway {
    client: HttpClient,
    endpoints: Endpoints,
}

impl Gateway {
    /// Gateway against the production provider endpoints.
    pub fn new(client: HttpClient) -> Self {
        Self::with_endpoints(client, Endpoints::default())
    }

    /// Gateway with per-provider base URL overrides.
    pub fn with_endpoints(client: HttpClient, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    /// Resolve, guard, dispatch.
    pub async fn execute(
        &self,
        provider: Provider,
        overrides: RequestOverrides,
        settings: &Settings,
    ) -> Result<SearchResponse, SearchError> {
        let request = resolve(provider, overrides, settings)?;
        let api_key = credentials::resolve(provider)?;
        info!(
            provider = %provider,
            query = %request.query,
            max_results = request.max_results,
            "dispatching search"
        );
        let adapter = self.adapter(provider, api_key);
        adapter.search(&request, &self.client).await
    }

    fn adapter(&self, provider: Provider, api_key: String) -> Box<dyn SearchAdapter> {
        match provider {
            Provider::Serper => {
                let mut adapter = Serper::new(api_key);
                if let Some(url) = &self.endpoints.serper {
                    adapter = adapter.with_base_url(url.as_str());
                }
                Box::new(adapter)
            }
            Provider::Tavily => {
                let mut adapter = Tavily::new(api_key);
                if let Some(url) = &self.endpoints.tavily {
                    adapter = adapter.with_base_url(url.as_str());
                }
                Box::new(adapter)
            }
            Provider::Exa => {
                let mut adapter = Exa::new(api_key);
                if let Some(url) = &self.endpoints.exa {
                    adapter = adapter.with_base_url(url.as_str());
                }
                Box::new(adapter)
            }
        }
    }
}
