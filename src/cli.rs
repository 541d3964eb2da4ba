//! Command-line interface
//!
//! Flag surface for the gateway. Values parsed here are explicit
//! overrides: anything left unset falls through to persisted
//! configuration and the built-in defaults during request resolution.

use std::path::PathBuf;

use clap::Parser;

use crate::providers::Provider;
use crate::request::{
    ExaCategory, ExaSearchType, RequestOverrides, SearchDepth, SearchTopic, SerperEndpoint,
};

const PROVIDER_GUIDE: &str = "\
Provider Guide:
  serper  -> Google Search: products, shopping, local, quick facts, news
  tavily  -> Research: deep dives, synthesized answers, full content
  exa     -> Neural: semantic queries, similar pages, company discovery

Examples:
  # Quick product lookup (Serper)
  websearch -p serper -q \"iPhone 16 specs\" --images

  # Deep research (Tavily)
  websearch -p tavily -q \"quantum computing\" --depth advanced --raw-content

  # Find similar companies (Exa)
  websearch -p exa --similar-url \"https://stripe.com\" --category company

  # Semantic search (Exa)
  websearch -p exa -q \"AI coding assistant startups\" --category company";

/// Unified multi-provider search (Serper, Tavily, Exa)
#[derive(Debug, Parser)]
#[command(name = "websearch", version = crate::VERSION, after_help = PROVIDER_GUIDE)]
pub struct Cli {
    /// Search provider (serper=Google, tavily=Research, exa=Neural)
    #[arg(short, long, value_enum)]
    pub provider: Provider,

    /// Search query (required unless using --similar-url with Exa)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum results (default: 5)
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Include images (Serper/Tavily)
    #[arg(long)]
    pub images: bool,

    /// Country code for Serper (us, uk, ca, au, de, fr, es, it, at, etc.) (default: us)
    #[arg(long)]
    pub country: Option<String>,

    /// Language code for Serper (en, de, fr, es, it, nl, pt, ru, zh, ja, ko, etc.) (default: en)
    #[arg(long)]
    pub language: Option<String>,

    /// Serper search type (default: search)
    #[arg(long = "type", value_enum)]
    pub endpoint: Option<SerperEndpoint>,

    /// Time filter for Serper
    #[arg(long, value_parser = ["hour", "day", "week", "month", "year"])]
    pub time_range: Option<String>,

    /// Tavily search depth (default: basic, advanced costs more)
    #[arg(long, value_enum)]
    pub depth: Option<SearchDepth>,

    /// Tavily topic mode (default: general)
    #[arg(long, value_enum)]
    pub topic: Option<SearchTopic>,

    /// Include full page content (Tavily, increases response size)
    #[arg(long)]
    pub raw_content: bool,

    /// Exa search type (default: neural for semantic, keyword for exact)
    #[arg(long, value_enum)]
    pub exa_type: Option<ExaSearchType>,

    /// Exa category filter
    #[arg(long, value_enum)]
    pub category: Option<ExaCategory>,

    /// Start date for Exa (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date for Exa (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// Find pages similar to this URL (Exa only, replaces query)
    #[arg(long)]
    pub similar_url: Option<String>,

    /// Only include these domains (Tavily/Exa)
    #[arg(long, num_args = 1..)]
    pub include_domains: Option<Vec<String>>,

    /// Exclude these domains (Tavily/Exa)
    #[arg(long, num_args = 1..)]
    pub exclude_domains: Option<Vec<String>>,

    /// Compact JSON output (no indentation)
    #[arg(long)]
    pub compact: bool,

    /// Path to a configuration file (overrides discovery)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Everything this invocation said explicitly, ready for resolution.
    pub fn overrides(&self) -> RequestOverrides {
        RequestOverrides {
            query: self.query.clone(),
            max_results: self.max_results,
            include_images: self.images,
            country: self.country.clone(),
            language: self.language.clone(),
            endpoint: self.endpoint,
            time_range: self.time_range.clone(),
            depth: self.depth,
            topic: self.topic,
            include_raw_content: self.raw_content,
            search_type: self.exa_type,
            category: self.category,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
            similar_url: self.similar_url.clone(),
            include_domains: self.include_domains.clone(),
            exclude_domains: self.exclude_domains.clone(),
        }
    }
}
