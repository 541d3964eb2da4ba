//! Request resolution
//!
//! Merges the three precedence layers (explicit overrides, persisted
//! configuration, built-in defaults) into one canonical request and
//! rejects malformed input before anything touches the network.

mod models;

pub use models::*;

use chrono::NaiveDate;
use url::Url;

use crate::config::Settings;
use crate::error::SearchError;
use crate::providers::Provider;
use crate::DEFAULT_MAX_RESULTS;

/// Resolve raw per-invocation values into a canonical request.
///
/// Explicit values always win, configuration fills the gaps, and the
/// `Default` impls of the option bags supply the rest. Fails with a
/// usage error on missing query, zero result budget, malformed dates,
/// or a relative similarity URL.
pub fn resolve(
    provider: Provider,
    overrides: RequestOverrides,
    settings: &Settings,
) -> Result<SearchRequest, SearchError> {
    let query = match overrides.query.filter(|q| !q.is_empty()) {
        Some(query) => query,
        // Similarity search carries the URL instead of a query.
        None if provider == Provider::Exa && overrides.similar_url.is_some() => String::new(),
        None => {
            return Err(SearchError::Usage(
                "--query is required (unless using --similar-url with Exa)".to_string(),
            ))
        }
    };

    let max_results = overrides
        .max_results
        .or(settings.defaults.max_results)
        .unwrap_or(DEFAULT_MAX_RESULTS);
    if max_results == 0 {
        return Err(SearchError::Usage(
            "--max-results must be at least 1".to_string(),
        ));
    }

    if let Some(url) = overrides.similar_url.as_deref() {
        Url::parse(url).map_err(|e| {
            SearchError::Usage(format!("--similar-url must be an absolute URL: {e}"))
        })?;
    }

    for (flag, value) in [
        ("--start-date", &overrides.start_date),
        ("--end-date", &overrides.end_date),
    ] {
        if let Some(date) = value {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
                SearchError::Usage(format!("{flag} must be formatted YYYY-MM-DD, got '{date}'"))
            })?;
        }
    }

    let builtin = SerperOptions::default();
    let serper = SerperOptions {
        country: overrides
            .country
            .or_else(|| settings.serper.country.clone())
            .unwrap_or(builtin.country),
        language: overrides
            .language
            .or_else(|| settings.serper.language.clone())
            .unwrap_or(builtin.language),
        endpoint: overrides
            .endpoint
            .or(settings.serper.endpoint)
            .unwrap_or(builtin.endpoint),
        time_range: overrides.time_range,
        include_images: overrides.include_images,
    };

    let tavily = TavilyOptions {
        depth: overrides.depth.or(settings.tavily.depth).unwrap_or_default(),
        topic: overrides.topic.or(settings.tavily.topic).unwrap_or_default(),
        include_images: overrides.include_images,
        include_raw_content: overrides.include_raw_content,
        include_domains: overrides.include_domains.clone(),
        exclude_domains: overrides.exclude_domains.clone(),
    };

    let exa = ExaOptions {
        search_type: overrides
            .search_type
            .or(settings.exa.search_type)
            .unwrap_or_default(),
        category: overrides.category.or(settings.exa.category),
        start_date: overrides.start_date,
        end_date: overrides.end_date,
        similar_url: overrides.similar_url,
        include_domains: overrides.include_domains,
        exclude_domains: overrides.exclude_domains,
    };

    Ok(SearchRequest {
        provider,
        query,
        max_results,
        serper,
        tavily,
        exa,
    })
}
