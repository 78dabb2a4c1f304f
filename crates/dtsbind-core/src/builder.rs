//! Module builder: declaration tree -> [`Module`] IR.
//!
//! One recursive descent over a named declaration block. Each child is
//! classified by its declaration kind (an exhaustive match over the closed
//! swc `Decl` enum) and appended to the matching list; nested namespaces
//! recurse; repeated function names merge into their overload set. The
//! walk is a pure function of the input tree — no side effects beyond IR
//! construction, and the swc nodes are never mutated.

use dtsbind_common::{Error, Result};
use dtsbind_frontend::ParsedFile;
use swc_common::Spanned;
use swc_ecma_ast::{
    Decl, FnDecl, Function, ModuleDecl, ModuleItem, Pat, Stmt, TsModuleDecl, TsModuleName,
    TsNamespaceBody,
};

use crate::comments;
use crate::enums;
use crate::ir::{
    AliasItem, ClassItem, InterfaceItem, Module, OverloadSet, Param, Signature, TypeExpr, VarItem,
};
use crate::typemap;

/// Build the IR for one ambient module or namespace declaration.
///
/// `doc` is the already-reformatted doc comment attached to the declaration
/// site (the caller owns the position, since `export` wrappers shift where
/// comments attach).
pub fn build_module(file: &ParsedFile, decl: &TsModuleDecl, doc: String) -> Result<Module> {
    let name = match &decl.id {
        TsModuleName::Ident(ident) => ident.sym.to_string(),
        TsModuleName::Str(literal) => literal.value.to_string_lossy().into_owned(),
    };
    let Some(body) = &decl.body else {
        return Err(Error::MalformedNode(format!("module `{name}` has no body")));
    };

    let mut module = Module::new(name, doc);
    fill_namespace(file, body, &mut module)?;
    Ok(module)
}

fn fill_namespace(file: &ParsedFile, body: &TsNamespaceBody, module: &mut Module) -> Result<()> {
    match body {
        TsNamespaceBody::TsModuleBlock(block) => {
            tracing::debug!(
                module = %module.name,
                members = block.body.len(),
                "collecting module members"
            );
            for item in &block.body {
                collect_item(file, item, module)?;
            }
            Ok(())
        }
        // `namespace A.B { .. }` sugar: the right-hand side becomes a
        // nested child module.
        TsNamespaceBody::TsNamespaceDecl(nested) => {
            let mut child = Module::new(nested.id.sym.to_string(), String::new());
            fill_namespace(file, &nested.body, &mut child)?;
            module.children.push(child);
            Ok(())
        }
    }
}

fn collect_item(file: &ParsedFile, item: &ModuleItem, module: &mut Module) -> Result<()> {
    // Doc comments attach to the first token of the whole item, which for
    // `export declare function ..` is the `export` keyword.
    let doc = comments::reformat(&file.leading_docs(item.span_lo()));

    let decl = match item {
        ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => &export.decl,
        ModuleItem::Stmt(Stmt::Decl(decl)) => decl,
        // Imports, re-exports, and bare statements declare nothing to bind.
        _ => return Ok(()),
    };

    match decl {
        Decl::TsModule(nested) => {
            module.children.push(build_module(file, nested, doc)?);
        }
        Decl::Fn(function) => add_function(file, function, doc, module)?,
        Decl::Class(class) => {
            module.classes.push(ClassItem {
                name: class.ident.sym.to_string(),
                doc,
            });
        }
        Decl::TsInterface(interface) => {
            module.interfaces.push(InterfaceItem {
                name: interface.id.sym.to_string(),
                doc,
            });
        }
        Decl::TsEnum(decl) => {
            module.enums.push(enums::translate_enum(file, decl, doc)?);
        }
        Decl::TsTypeAlias(alias) => {
            module.aliases.push(AliasItem {
                name: alias.id.sym.to_string(),
                doc,
            });
        }
        Decl::Var(var) => {
            for declarator in &var.decls {
                let Pat::Ident(binding) = &declarator.name else {
                    return Err(Error::MissingName(file.snippet(declarator.name.span())));
                };
                module.vars.push(VarItem {
                    name: binding.id.sym.to_string(),
                    doc: doc.clone(),
                });
            }
        }
        Decl::Using(using) => {
            return Err(Error::UnsupportedConstruct(file.snippet(using.span)));
        }
    }
    Ok(())
}

/// Create the overload set for a function name, or merge one more signature
/// into the existing set. The set's doc comment is the first occurrence's.
fn add_function(
    file: &ParsedFile,
    decl: &FnDecl,
    doc: String,
    module: &mut Module,
) -> Result<()> {
    let name = decl.ident.sym.to_string();
    let signature = lower_signature(file, &name, &decl.function)?;

    match module.functions.get_mut(&name) {
        Some(set) => set.merge(signature)?,
        None => {
            module
                .functions
                .insert(name.clone(), OverloadSet::new(name, doc, signature));
        }
    }
    Ok(())
}

fn lower_signature(file: &ParsedFile, name: &str, function: &Function) -> Result<Signature> {
    let mut params = Vec::with_capacity(function.params.len());
    for param in &function.params {
        // Rest and destructuring parameters are an unsupported shape, not a
        // nameless declaration.
        let Pat::Ident(binding) = &param.pat else {
            return Err(Error::UnsupportedConstruct(file.snippet(param.pat.span())));
        };
        let ty = match &binding.type_ann {
            Some(annotation) => typemap::lower(file, &annotation.type_ann)?,
            // Declaration files without an annotation mean implicit `any`.
            None => TypeExpr::Any,
        };
        params.push(Param {
            name: binding.id.sym.to_string(),
            ty,
            optional: binding.id.optional,
        });
    }

    let ret = match &function.return_type {
        Some(annotation) => typemap::lower(file, &annotation.type_ann)?,
        None => TypeExpr::Unit,
    };

    Ok(Signature {
        name: name.to_string(),
        params,
        ret,
    })
}
