//! Shortstack Core Library
//!
//! Front-end independent logic of the Shortstack URL shortener client:
//! - Form controller (create / copy / clear)
//! - Request building and TTL validation
//! - Mapping of service replies to the form result and toast notifications
//! - Service status check (health + version)
//!
//! The page the controller works on is abstracted through traits
//! ([`FormState`], [`Toaster`], [`Clipboard`]), so the same logic drives the
//! terminal UI and the in-memory fakes used in tests.

pub mod error;
pub mod request;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{FormController, StatusService};
pub use traits::{Clipboard, FormState, Toaster};
pub use types::{
    CreateOutcome, FormField, MemoryForm, ServiceStatus, TOAST_DURATION, Toast, ToastKind,
};
