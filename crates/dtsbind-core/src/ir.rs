//! Intermediate representation of one translated declaration tree.
//!
//! The IR is built once, top-down, by the module builder and consumed
//! exactly once by the emitter; nothing mutates it in between. The only
//! mutation during construction itself is overload accumulation: repeated
//! same-named function declarations merge into one [`OverloadSet`].

use dtsbind_common::{Error, Result};
use indexmap::IndexMap;

/// One namespace worth of declarations, in source order.
///
/// `functions` is keyed by the declared function name; `IndexMap` keeps
/// first-seen insertion order, which is what makes emission deterministic.
/// Keys are unique by construction and every set holds at least one
/// signature.
#[derive(Debug)]
pub struct Module {
    pub name: String,
    /// Reformatted doc comment (`/// ` lines), empty when undocumented.
    pub doc: String,
    pub vars: Vec<VarItem>,
    pub functions: IndexMap<String, OverloadSet>,
    pub classes: Vec<ClassItem>,
    pub interfaces: Vec<InterfaceItem>,
    pub enums: Vec<EnumItem>,
    pub aliases: Vec<AliasItem>,
    pub children: Vec<Module>,
}

impl Module {
    pub fn new(name: String, doc: String) -> Self {
        Module {
            name,
            doc,
            vars: Vec::new(),
            functions: IndexMap::new(),
            classes: Vec::new(),
            interfaces: Vec::new(),
            enums: Vec::new(),
            aliases: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A group of same-named function signatures, ordered by first-seen
/// declaration order. The doc comment comes from the first occurrence.
#[derive(Debug)]
pub struct OverloadSet {
    pub name: String,
    pub doc: String,
    pub signatures: Vec<Signature>,
}

impl OverloadSet {
    pub fn new(name: String, doc: String, first: Signature) -> Self {
        OverloadSet {
            name,
            doc,
            signatures: vec![first],
        }
    }

    /// Append one more signature to this set.
    ///
    /// The name check is a defensive invariant: the build-site dispatch
    /// already routes signatures by name, so a mismatch here means the
    /// builder itself went wrong.
    pub fn merge(&mut self, signature: Signature) -> Result<()> {
        if signature.name != self.name {
            return Err(Error::MergeConflict {
                set: self.name.clone(),
                incoming: signature.name,
            });
        }
        self.signatures.push(signature);
        Ok(())
    }
}

#[derive(Debug)]
pub struct Signature {
    pub name: String,
    pub params: Vec<Param>,
    pub ret: TypeExpr,
}

#[derive(Debug)]
pub struct Param {
    pub name: String,
    pub ty: TypeExpr,
    /// `x?: T` in the source. Always rendered `Option<..>`, whatever `ty` is.
    pub optional: bool,
}

/// The supported type-expression subset, closed by construction.
///
/// Anything the lowering step cannot express as one of these variants is an
/// `UnsupportedConstruct` error; there is deliberately no catch-all variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `string`
    Str,
    /// `number`
    Num,
    /// `boolean`
    Bool,
    /// `void`, bare `undefined`, or a missing return annotation
    Unit,
    /// `any` / `unknown`
    Any,
    /// Type reference, name kept verbatim, with mapped type arguments.
    Named(String, Vec<TypeExpr>),
    /// `T[]`
    Array(Box<TypeExpr>),
    /// `[T1, .., Tn]`
    Tuple(Vec<TypeExpr>),
    /// Two-branch union whose second branch is `undefined`.
    Optional(Box<TypeExpr>),
    /// Two-branch union whose first branch is `readonly T`.
    Ref(Box<TypeExpr>),
    /// `(p: P, ..) => R`
    Func(Vec<TypeExpr>, Box<TypeExpr>),
}

/// A translated enum: name verbatim, members capitalized, initializers
/// copied as raw source text. Parsed but not emitted today.
#[derive(Debug)]
pub struct EnumItem {
    pub name: String,
    pub doc: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug)]
pub struct EnumMember {
    pub name: String,
    /// Verbatim initializer text, no numeric parsing or validation.
    pub init: Option<String>,
}

/// Declarations that are collected for ordering but not emitted today.
#[derive(Debug)]
pub struct ClassItem {
    pub name: String,
    pub doc: String,
}

#[derive(Debug)]
pub struct InterfaceItem {
    pub name: String,
    pub doc: String,
}

#[derive(Debug)]
pub struct AliasItem {
    pub name: String,
    pub doc: String,
}

#[derive(Debug)]
pub struct VarItem {
    pub name: String,
    pub doc: String,
}
