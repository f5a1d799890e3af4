//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// The author of a chat message, in the provider's wire casing.
///
/// # Examples
///
/// ```
/// use savonarola_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// assert_ne!(Role::User, Role::Assistant);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System messages provide context and instructions
    #[display("system")]
    System,
    /// User messages are from the human
    #[display("user")]
    User,
    /// Assistant messages are from the model
    #[display("assistant")]
    Assistant,
}
