//! Common types used across the Nomics client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
