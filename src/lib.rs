//! LINE Login PKCE demo library
//!
//! OAuth 2.0 authorization code flow with PKCE against LINE Login, exposed
//! as a three-page web application.

pub mod config;
pub mod error;
pub mod oauth;
pub mod web;
