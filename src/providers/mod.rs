//! Provider adapters
//!
//! Defines the SearchAdapter trait, the provider tag enum used for
//! dispatch, and one adapter per upstream API.

mod traits;

// Adapter implementations
pub mod exa;
pub mod serper;
pub mod tavily;

pub use traits::{ApiRequest, SearchAdapter};

pub(crate) use traits::{opt_str_field, round_to, str_field, truncate_chars};

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// The supported search providers.
///
/// Adding a provider means adding a variant here, an adapter module,
/// and the credential mapping. Dispatch everywhere else is a match on
/// this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Serper,
    Tavily,
    Exa,
}

impl Provider {
    /// Lowercase wire and CLI name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Serper => "serper",
            Provider::Tavily => "tavily",
            Provider::Exa => "exa",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "serper" => Ok(Provider::Serper),
            "tavily" => Ok(Provider::Tavily),
            "exa" => Ok(Provider::Exa),
            other => Err(SearchError::Usage(format!(
                "unknown provider '{other}' (expected serper, tavily, or exa)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_round_trip() {
        for provider in [Provider::Serper, Provider::Tavily, Provider::Exa] {
            assert_eq!(provider.as_str().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn test_unknown_provider_is_a_usage_error() {
        let err = "bing".parse::<Provider>().unwrap_err();
        assert!(matches!(err, SearchError::Usage(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_provider_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Provider::Exa).unwrap(), "\"exa\"");
        let provider: Provider = serde_json::from_str("\"serper\"").unwrap();
        assert_eq!(provider, Provider::Serper);
    }
}
