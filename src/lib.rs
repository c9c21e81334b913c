//! Aliasdeck - a lightweight terminal client for managing email aliases.
//!
//! This crate provides a terminal front-end for an email-alias service with
//! clean architecture, implementing authentication, session management, and
//! a TUI interface over the service's HTTP API.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing session state, view-models, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "aliasdeck";
