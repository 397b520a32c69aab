//! Transport seam for remote resources.
//!
//! This module provides the contract that resources use to reach the remote API,
//! and a scripted stand-in for tests.
//!
//! # Main Components
//!
//! - [`Session`] - Trait that transports implement
//! - [`Method`] - Remote method names invoked by resources
//! - [`SessionError`] - Transport and remote-side errors
//!
//! # Testing
//!
//! See [`mock`] module for a scripted session that records every call.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
