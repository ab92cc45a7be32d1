//! Utility modules for chargehound
//!
//! This module contains various utility functions used throughout the library.

pub mod builder_helpers;

pub use builder_helpers::*;
