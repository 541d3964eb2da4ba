//! Canonical request model and provider option vocabularies

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::providers::Provider;

/// Serper endpoint selector, one per Google vertical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SerperEndpoint {
    #[default]
    Search,
    News,
    Images,
    Videos,
    Places,
    Shopping,
}

impl SerperEndpoint {
    /// URL path segment for this vertical.
    pub fn as_str(&self) -> &'static str {
        match self {
            SerperEndpoint::Search => "search",
            SerperEndpoint::News => "news",
            SerperEndpoint::Images => "images",
            SerperEndpoint::Videos => "videos",
            SerperEndpoint::Places => "places",
            SerperEndpoint::Shopping => "shopping",
        }
    }
}

/// Tavily crawl depth. Advanced costs more API credits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchDepth::Basic => "basic",
            SearchDepth::Advanced => "advanced",
        }
    }
}

/// Tavily topic mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchTopic {
    #[default]
    General,
    News,
}

impl SearchTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchTopic::General => "general",
            SearchTopic::News => "news",
        }
    }
}

/// Exa ranking mode. Neural is semantic, keyword is exact-match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExaSearchType {
    #[default]
    Neural,
    Keyword,
}

impl ExaSearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExaSearchType::Neural => "neural",
            ExaSearchType::Keyword => "keyword",
        }
    }
}

/// Exa content category filter.
///
/// Several wire values contain spaces, so both the serde names and the
/// CLI value names are spelled out per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExaCategory {
    Company,
    #[serde(rename = "research paper")]
    #[value(name = "research paper")]
    ResearchPaper,
    News,
    Pdf,
    Github,
    Tweet,
    #[serde(rename = "personal site")]
    #[value(name = "personal site")]
    PersonalSite,
    #[serde(rename = "linkedin profile")]
    #[value(name = "linkedin profile")]
    LinkedinProfile,
}

impl ExaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExaCategory::Company => "company",
            ExaCategory::ResearchPaper => "research paper",
            ExaCategory::News => "news",
            ExaCategory::Pdf => "pdf",
            ExaCategory::Github => "github",
            ExaCategory::Tweet => "tweet",
            ExaCategory::PersonalSite => "personal site",
            ExaCategory::LinkedinProfile => "linkedin profile",
        }
    }
}

/// Serper knobs after precedence merging.
#[derive(Debug, Clone, PartialEq)]
pub struct SerperOptions {
    /// Google country code (the `gl` parameter)
    pub country: String,
    /// Interface language (the `hl` parameter)
    pub language: String,
    /// Which vertical to query
    pub endpoint: SerperEndpoint,
    /// Recency token, mapped to a `tbs` filter when recognized
    pub time_range: Option<String>,
    /// Fetch an image strip alongside the organic results
    pub include_images: bool,
}

impl Default for SerperOptions {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            language: "en".to_string(),
            endpoint: SerperEndpoint::Search,
            time_range: None,
            include_images: false,
        }
    }
}

/// Tavily knobs after precedence merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TavilyOptions {
    pub depth: SearchDepth,
    pub topic: SearchTopic,
    pub include_images: bool,
    /// Attach full page content to each result
    pub include_raw_content: bool,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
}

/// Exa knobs after precedence merging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExaOptions {
    pub search_type: ExaSearchType,
    pub category: Option<ExaCategory>,
    /// Earliest publication date, YYYY-MM-DD
    pub start_date: Option<String>,
    /// Latest publication date, YYYY-MM-DD
    pub end_date: Option<String>,
    /// Find pages similar to this URL instead of running a query
    pub similar_url: Option<String>,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
}

/// One canonical request, fully resolved and boundary-validated.
///
/// Each provider adapter reads the shared fields plus its own option
/// bag and ignores the others.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub provider: Provider,
    pub query: String,
    pub max_results: usize,
    pub serper: SerperOptions,
    pub tavily: TavilyOptions,
    pub exa: ExaOptions,
}

/// Raw per-invocation values before precedence merging.
///
/// `None` means the caller did not say, which lets persisted
/// configuration and then the built-in defaults fill the field.
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub query: Option<String>,
    pub max_results: Option<usize>,
    pub include_images: bool,
    pub country: Option<String>,
    pub language: Option<String>,
    pub endpoint: Option<SerperEndpoint>,
    pub time_range: Option<String>,
    pub depth: Option<SearchDepth>,
    pub topic: Option<SearchTopic>,
    pub include_raw_content: bool,
    pub search_type: Option<ExaSearchType>,
    pub category: Option<ExaCategory>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub similar_url: Option<String>,
    pub include_domains: Option<Vec<String>>,
    pub exclude_domains: Option<Vec<String>>,
}
