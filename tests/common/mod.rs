//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Known valid and invalid documents
//! - Generators for valid documents
//! - Custom assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
