//! Search pipeline
//!
//! Wires request resolution, the credential guard, and provider
//! dispatch into one executor.

mod executor;

pub use executor::{Endpoints, Gateway};
