//! Diagnostic system for structured error reporting.
//!
//! Every fatal engine error is convertible into a [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels (why it's wrong)
//!
//! The engine never renders diagnostics itself; the surrounding compiler
//! driver owns presentation.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
