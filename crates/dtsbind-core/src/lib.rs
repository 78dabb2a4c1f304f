//! Translation engine for TypeScript declaration files.
//!
//! Turns the public type declarations of a `.d.ts` file into wasm-bindgen
//! `extern "C"` binding declarations, preserving structural typing across
//! the language boundary:
//!
//! ```text
//! declare module 'vscode' {
//!     export function version(): string;
//! }
//! ```
//!
//! becomes
//!
//! ```text
//! use wasm_bindgen::prelude::*;
//!
//! pub mod vscode {
//!     #[wasm_bindgen(js_namespace = vscode)]
//!     extern "C" {
//!         #[wasm_bindgen(js_name = "version")]
//!         pub fn version_1() -> String;
//!     }
//! }
//! ```
//!
//! One pass, no feedback loops: the front end parses, [`builder`] produces
//! the IR tree, [`emit`] renders it. Identical input always yields
//! byte-identical output. Any construct outside the supported subset aborts
//! the run — translation is all-or-nothing, because a silently wrong
//! signature would corrupt the FFI calling contract.

pub mod builder;
pub mod comments;
pub mod emit;
pub mod enums;
pub mod ir;
pub mod typemap;

use std::fs;
use std::path::Path;

use dtsbind_frontend::ParsedFile;
use swc_common::Spanned;
use swc_ecma_ast::{Decl, ModuleDecl, ModuleItem, Stmt};

pub use dtsbind_common::{Error, Result};

use crate::emit::Emitter;
use crate::ir::Module;

/// Translate one declaration file from disk.
pub fn translate_file(path: &Path) -> Result<String> {
    let source = fs::read_to_string(path).map_err(|err| Error::MissingSourceFile {
        path: path.to_path_buf(),
        source: err,
    })?;
    translate_source(&path.display().to_string(), &source)
}

/// Translate declaration-file source text held in memory.
///
/// `name` must still look like a declaration file path; the `.d.ts` rule is
/// about input intent, not about where the bytes came from.
pub fn translate_source(name: &str, source: &str) -> Result<String> {
    if !name.ends_with(".d.ts") {
        return Err(Error::NotADeclarationFile(name.into()));
    }

    let _span = tracing::debug_span!("translate", file = %name).entered();

    let parsed = ParsedFile::parse_source(name, source)?;
    let modules = build_modules(&parsed)?;
    tracing::debug!(roots = modules.len(), "built module IR");

    let mut out = String::new();
    let mut emitter = Emitter::new(&mut out);
    emitter.emit_header();
    for module in &modules {
        emitter.blank();
        emitter.emit_module(module);
    }
    Ok(out)
}

/// Build the IR for every top-level ambient module in a parsed file.
///
/// Anything else at the top level (the odd global interface, triple-slash
/// references) is outside the ambient-module contract and skipped.
pub fn build_modules(parsed: &ParsedFile) -> Result<Vec<Module>> {
    let mut modules = Vec::new();
    for item in &parsed.module().body {
        let decl = match item {
            ModuleItem::Stmt(Stmt::Decl(decl)) => decl,
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => &export.decl,
            _ => continue,
        };
        if let Decl::TsModule(module_decl) = decl {
            let doc = comments::reformat(&parsed.leading_docs(item.span_lo()));
            modules.push(builder::build_module(parsed, module_decl, doc)?);
        }
    }
    Ok(modules)
}
