//! WebSearch-RS: A unified multi-provider search gateway written in Rust
//!
//! One canonical request fans out to the Serper, Tavily, or Exa wire
//! protocol; three response shapes collapse back into one canonical
//! JSON result document and one error taxonomy.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod network;
pub mod output;
pub mod providers;
pub mod request;
pub mod results;
pub mod search;

pub use config::Settings;
pub use error::SearchError;
pub use network::HttpClient;
pub use providers::{Provider, SearchAdapter};
pub use request::{RequestOverrides, SearchRequest};
pub use results::{ResultItem, SearchResponse};
pub use search::{Endpoints, Gateway};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Default number of results per request
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Shortest API key length accepted as plausible
pub const MIN_KEY_LENGTH: usize = 10;
