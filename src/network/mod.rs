//! HTTP networking module
//!
//! Provides the shared transport for talking to search providers.

mod client;

pub use client::HttpClient;
