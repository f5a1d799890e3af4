//! Chat-completion client for the Savonarola demo gateway.
//!
//! This crate owns the outbound half of the gateway: the [`ChatCompletions`]
//! trait that the HTTP surface depends on, the environment-sourced
//! [`AzureConfig`], and the [`AzureChatClient`] implementation that speaks
//! the Azure OpenAI chat-completion wire format and classifies provider
//! errors into the gateway's error taxonomy.
//!
//! # Example
//!
//! ```rust,no_run
//! use savonarola_client::{AzureChatClient, AzureConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AzureConfig::from_env()?;
//! let client = AzureChatClient::new(config);
//! // Hand the client to the HTTP surface...
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod traits;

pub use client::AzureChatClient;
pub use config::AzureConfig;
pub use traits::ChatCompletions;
