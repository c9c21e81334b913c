//! Alias service API adapter.

mod client;
mod dto;

pub use client::{ApiClient, DEFAULT_API_BASE};
