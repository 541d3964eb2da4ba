//! Settings structures for the websearch configuration file

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::request::{ExaCategory, ExaSearchType, SearchDepth, SearchTopic, SerperEndpoint};

/// Persisted defaults matching config.json.
///
/// Every section and every field is optional. Absent fields fall
/// through to the built-in defaults during request resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub defaults: DefaultsSection,
    pub serper: SerperSection,
    pub tavily: TavilySection,
    pub exa: ExaSection,
}

impl Settings {
    /// Load settings from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }
}

/// Cross-provider defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    pub max_results: Option<usize>,
}

/// Serper defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerperSection {
    pub country: Option<String>,
    pub language: Option<String>,
    /// Endpoint vertical, stored under the `type` key
    #[serde(rename = "type")]
    pub endpoint: Option<SerperEndpoint>,
}

/// Tavily defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TavilySection {
    pub depth: Option<SearchDepth>,
    pub topic: Option<SearchTopic>,
}

/// Exa defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExaSection {
    /// Ranking mode, stored under the `type` key
    #[serde(rename = "type")]
    pub search_type: Option<ExaSearchType>,
    pub category: Option<ExaCategory>,
}
