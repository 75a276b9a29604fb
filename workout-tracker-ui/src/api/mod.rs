//! API Client
//!
//! gloo-net transport for the shared workout service client.

pub mod client;

pub use client::client;
