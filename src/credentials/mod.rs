//! Credential resolution
//!
//! API keys come from per-provider environment variables and are
//! sanity-checked before any request goes out. Failures carry enough
//! structure for the output layer to print actionable remediation.

use crate::error::SearchError;
use crate::providers::Provider;
use crate::MIN_KEY_LENGTH;

/// Environment variable holding the provider's API key.
pub fn env_var(provider: Provider) -> &'static str {
    match provider {
        Provider::Serper => "SERPER_API_KEY",
        Provider::Tavily => "TAVILY_API_KEY",
        Provider::Exa => "EXA_API_KEY",
    }
}

/// Where to create an account and obtain a key.
pub fn signup_url(provider: Provider) -> &'static str {
    match provider {
        Provider::Serper => "https://serper.dev",
        Provider::Tavily => "https://tavily.com",
        Provider::Exa => "https://exa.ai",
    }
}

/// Read and validate the provider's API key from the environment.
pub fn resolve(provider: Provider) -> Result<String, SearchError> {
    validate(provider, std::env::var(env_var(provider)).ok())
}

/// Validate a candidate key value.
///
/// An unset or empty variable counts as missing. Anything shorter than
/// [`MIN_KEY_LENGTH`] is treated as a paste accident and rejected
/// instead of being sent to the provider.
pub fn validate(provider: Provider, value: Option<String>) -> Result<String, SearchError> {
    match value.filter(|v| !v.is_empty()) {
        None => Err(credential_error(
            provider,
            format!("Missing API key for {provider}"),
        )),
        Some(key) if key.chars().count() < MIN_KEY_LENGTH => Err(credential_error(
            provider,
            format!("API key for {provider} appears invalid (too short)"),
        )),
        Some(key) => Ok(key),
    }
}

fn credential_error(provider: Provider, message: String) -> SearchError {
    SearchError::Credential {
        message,
        env_var: env_var(provider),
        signup_url: signup_url(provider),
        how_to_fix: remediation_steps(provider),
    }
}

/// Numbered setup steps, printed verbatim in the error document.
fn remediation_steps(provider: Provider) -> Vec<String> {
    let var = env_var(provider);
    vec![
        format!("1. Get your API key from {}", signup_url(provider)),
        "2. Set the environment variable:".to_string(),
        format!("   export {var}=\"your-key\""),
        "3. Or add to .env file:".to_string(),
        format!("   echo '{var}=your-key' >> .env && source .env"),
    ]
}
