//! API key management for the Nomics API.
//!
//! Nomics authenticates every request with a static API key passed as the
//! `key` query parameter. There is no request signing.

mod credentials;

pub use credentials::{ApiKey, DEMO_API_KEY};
