//! Error types for the Savonarola demo gateway.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use savonarola_error::{ChatError, ChatErrorKind};
//!
//! fn fetch_completion() -> Result<String, ChatError> {
//!     Err(ChatError::new(ChatErrorKind::Http("Connection refused".into())))
//! }
//!
//! match fetch_completion() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chat;
mod config;
mod server;

pub use chat::{ChatError, ChatErrorKind};
pub use config::ConfigError;
pub use server::{ServerError, ServerErrorKind};
