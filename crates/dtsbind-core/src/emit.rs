//! Binding emitter: [`Module`] IR tree -> nested `extern "C"` block text.
//!
//! Depth-first, pre-order walk. Per module: doc comment, `pub mod` block,
//! child modules first, then one `#[wasm_bindgen(js_namespace = ..)]`
//! extern block holding one binding per overload-set signature. Output goes
//! to an injected buffer so the emitter is testable without capturing a
//! global stream.
//!
//! Ordering is the source declaration order, never sorted; together with
//! the ordinal suffix policy this makes emission byte-deterministic.

use dtsbind_common::idents;

use crate::ir::{Module, OverloadSet, Param, TypeExpr};
use crate::typemap;

const INDENT: &str = "    ";

pub struct Emitter<'a> {
    out: &'a mut String,
    depth: usize,
}

impl<'a> Emitter<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Emitter { out, depth: 0 }
    }

    /// The one global directive that makes the bindings resolve.
    pub fn emit_header(&mut self) {
        self.line("use wasm_bindgen::prelude::*;");
    }

    pub fn emit_module(&mut self, module: &Module) {
        tracing::trace!(module = %module.name, "emitting module block");
        self.doc_lines(&module.doc);
        self.line(&format!("pub mod {} {{", idents::escape(&module.name)));
        self.depth += 1;

        for child in &module.children {
            self.emit_module(child);
            self.blank();
        }

        // Enums, classes, interfaces, aliases, and variables are collected
        // in the IR but not emitted yet; only function bindings are.
        self.line(&format!(
            "#[wasm_bindgen(js_namespace = {})]",
            module.name
        ));
        self.line("extern \"C\" {");
        self.depth += 1;
        for set in module.functions.values() {
            self.emit_overload_set(set);
        }
        self.depth -= 1;
        self.line("}");

        self.depth -= 1;
        self.line("}");
    }

    /// One binding per signature, suffixed with its 1-based ordinal in
    /// declaration order. `js_name` points every suffixed binding back at
    /// the real foreign symbol, so the rename never leaks across the FFI
    /// boundary. The set's doc comment goes on the first binding.
    fn emit_overload_set(&mut self, set: &OverloadSet) {
        for (index, signature) in set.signatures.iter().enumerate() {
            if index == 0 {
                self.doc_lines(&set.doc);
            }
            self.line(&format!("#[wasm_bindgen(js_name = \"{}\")]", set.name));

            let params = signature
                .params
                .iter()
                .map(render_param)
                .collect::<Vec<_>>()
                .join(", ");
            let name = format!("{}_{}", set.name, index + 1);
            if signature.ret == TypeExpr::Unit {
                self.line(&format!("pub fn {name}({params});"));
            } else {
                self.line(&format!(
                    "pub fn {name}({params}) -> {};",
                    typemap::render(&signature.ret)
                ));
            }
        }
    }

    fn doc_lines(&mut self, doc: &str) {
        for line in doc.lines() {
            self.line(line);
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }
}

/// `name: T`, with the optional marker always winning: `x?: T` renders as
/// `Option<T>` whatever `T` lowered to.
fn render_param(param: &Param) -> String {
    let ty = typemap::render(&param.ty);
    let ty = if param.optional {
        format!("Option<{ty}>")
    } else {
        ty
    };
    format!("{}: {}", idents::escape(&param.name), ty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Signature;

    fn module_with(set: OverloadSet) -> Module {
        let mut module = Module::new("demo".into(), String::new());
        module.functions.insert(set.name.clone(), set);
        module
    }

    #[test]
    fn optional_param_renders_option_wrapped() {
        let param = Param {
            name: "label".into(),
            ty: TypeExpr::Str,
            optional: true,
        };
        assert_eq!(render_param(&param), "label: Option<String>");
    }

    #[test]
    fn keyword_param_names_are_escaped() {
        let param = Param {
            name: "type".into(),
            ty: TypeExpr::Num,
            optional: false,
        };
        assert_eq!(render_param(&param), "r#type: f64");
    }

    #[test]
    fn unit_return_omits_the_arrow() {
        let set = OverloadSet::new(
            "ping".into(),
            String::new(),
            Signature {
                name: "ping".into(),
                params: Vec::new(),
                ret: TypeExpr::Unit,
            },
        );
        let module = module_with(set);
        let mut out = String::new();
        Emitter::new(&mut out).emit_module(&module);
        assert!(out.contains("pub fn ping_1();"));
        assert!(!out.contains("-> ()"));
    }

    #[test]
    fn empty_module_still_gets_its_extern_block() {
        let module = Module::new("empty".into(), String::new());
        let mut out = String::new();
        Emitter::new(&mut out).emit_module(&module);
        assert_eq!(
            out,
            "pub mod empty {\n    #[wasm_bindgen(js_namespace = empty)]\n    extern \"C\" {\n    }\n}\n"
        );
    }
}
