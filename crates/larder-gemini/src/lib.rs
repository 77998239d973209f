//! Recipe generation over a `generateContent`-style generative language API.
//!
//! The only public surface is [`DefaultGeminiClient`], which implements
//! [`larder_core::RecipeGeneratorPort`], and its configuration.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// GeminiClient<B> is reached through the type alias and the port trait
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;

// Client
pub use client::DefaultGeminiClient;

// Configuration
pub use config::{
    API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClientConfig, MODEL_ENV,
};

// Errors surfaced by the constructor
pub use error::GeminiError;
