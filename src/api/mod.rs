//! API Layer
//!
//! HTTP client for the Quill REST API.

mod client;

pub use client::*;
