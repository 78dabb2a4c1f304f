//! Error taxonomy for the translation pipeline.
//!
//! Translation is all-or-nothing: every variant is unrecoverable for the
//! current run, and there is no partial-output or skip-and-continue mode.
//! Variants that point at a specific declaration carry the offending
//! construct's original source text so the `.d.ts` can be fixed by hand.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input path could not be read.
    #[error("source file not found: {path}")]
    MissingSourceFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not a `.d.ts` declaration file.
    #[error("source file is not a declaration file: {0}")]
    NotADeclarationFile(PathBuf),

    /// The front end rejected the input before translation started.
    #[error("failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    /// A function, class, or variable declaration has no plain identifier.
    #[error("declaration has no usable name: `{0}`")]
    MissingName(String),

    /// An expected child node (e.g. a module's body) is absent.
    #[error("malformed declaration node: {0}")]
    MalformedNode(String),

    /// A type expression outside the supported subset. An incorrect binding
    /// signature is worse than a build failure, so there is no fallback.
    #[error("unsupported construct: `{0}`")]
    UnsupportedConstruct(String),

    /// An overload signature was offered to a set with a different name.
    #[error("overload `{incoming}` cannot join set `{set}`")]
    MergeConflict { set: String, incoming: String },
}
