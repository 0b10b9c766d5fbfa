//! OAuth 2.0 authorization code flow with PKCE

pub mod client;
pub mod pkce;
pub mod profile;
pub mod token;

pub use client::{LineClient, ProviderConfig};
pub use pkce::PkceParams;
pub use profile::UserProfile;
pub use token::TokenResponse;
