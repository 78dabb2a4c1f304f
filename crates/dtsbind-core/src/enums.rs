//! Enum translation.
//!
//! The type name passes through unmodified; member names are capitalized to
//! Rust convention; explicit initializers are copied verbatim as source
//! text. No numeric parsing or validation happens here — a non-integer
//! initializer survives as-is, which is an accepted risk until enums are
//! actually emitted.

use dtsbind_common::{Result, idents};
use dtsbind_frontend::ParsedFile;
use swc_common::Spanned;
use swc_ecma_ast::{TsEnumDecl, TsEnumMemberId};

use crate::ir::{EnumItem, EnumMember};

pub fn translate_enum(file: &ParsedFile, decl: &TsEnumDecl, doc: String) -> Result<EnumItem> {
    let mut members = Vec::with_capacity(decl.members.len());
    for member in &decl.members {
        let raw = match &member.id {
            TsEnumMemberId::Ident(ident) => ident.sym.to_string(),
            TsEnumMemberId::Str(literal) => literal.value.to_string_lossy().into_owned(),
        };
        members.push(EnumMember {
            name: idents::capitalize(&raw),
            init: member.init.as_ref().map(|expr| file.snippet(expr.span())),
        });
    }

    Ok(EnumItem {
        name: decl.id.sym.to_string(),
        doc,
        members,
    })
}
