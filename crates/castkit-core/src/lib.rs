//! CastKit Core — shared error taxonomy.
//!
//! Cancellation of a cast action is deliberately not an error; the
//! dispatcher reports it as a clean outcome.

pub mod error;

pub use error::{Error, Result};
