//! Output serialization
//!
//! Exactly one JSON document per invocation: the canonical result on
//! stdout, or an error report on stderr. Pretty output is two-space
//! indented with non-ASCII characters left intact; compact output is a
//! single line. Error reports are always pretty.

use serde::Serialize;

use crate::error::SearchError;
use crate::providers::Provider;
use crate::results::SearchResponse;

/// JSON error report: the taxonomy message plus remediation extras.
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    error: String,
    provider: Provider,
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    env_var: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signup_url: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    how_to_fix: Option<&'a [String]>,
}

/// Serialize a successful search for stdout.
pub fn render_response(response: &SearchResponse, compact: bool) -> String {
    to_json(response, compact)
}

/// Serialize a failure for stderr.
///
/// The report always names the provider and the original query (null
/// when none was given). Provider errors add the HTTP status;
/// credential errors add the variable to set, the signup URL, and the
/// numbered remediation steps.
pub fn render_error(error: &SearchError, provider: Provider, query: Option<&str>) -> String {
    let mut report = ErrorReport {
        error: error.to_string(),
        provider,
        query,
        status: error.status(),
        env_var: None,
        signup_url: None,
        how_to_fix: None,
    };
    if let SearchError::Credential {
        env_var,
        signup_url,
        how_to_fix,
        ..
    } = error
    {
        report.env_var = Some(*env_var);
        report.signup_url = Some(*signup_url);
        report.how_to_fix = Some(how_to_fix.as_slice());
    }
    to_json(&report, false)
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.unwrap_or_else(|e| format!("{{\"error\": \"output serialization failed: {e}\"}}"))
}
