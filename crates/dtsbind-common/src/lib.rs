//! Common types and utilities for the dtsbind declaration translator.
//!
//! This crate provides the foundational pieces shared by all dtsbind crates:
//! - The error taxonomy (`Error`, `Result`)
//! - Identifier escaping and casing helpers (`idents`)

pub mod error;
pub use error::{Error, Result};

pub mod idents;
