//! Pastebin API module.
//!
//! This module provides:
//! - HTTP client for the login, listing and raw endpoints
//! - Credentials and session tokens

pub mod auth;
pub mod client;

pub use auth::{Credentials, SessionToken};
pub use client::PastebinApi;
