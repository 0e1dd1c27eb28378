//! API Client
//!
//! `gloo-net` transport for the shared election API client.

pub mod client;

pub use client::{api_client, get_api_base, read_attachment, GlooTransport};
