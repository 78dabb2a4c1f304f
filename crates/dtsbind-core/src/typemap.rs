//! Type mapping across the language boundary.
//!
//! Two pure layers: [`lower`] turns a swc type node into the closed
//! [`TypeExpr`] subset (this is where `UnsupportedConstruct` fires, carrying
//! the original source text), and [`render`] turns a `TypeExpr` into Rust
//! type syntax. `render` is total and always produces non-empty text.
//!
//! The mapping is strict on purpose. A union we cannot faithfully express,
//! a `keyof`, a mapped type — all of these abort the run instead of
//! degrading to a guess, because a wrong signature here corrupts the FFI
//! calling contract.

use dtsbind_common::{Error, Result};
use dtsbind_frontend::ParsedFile;
use swc_common::Spanned;
use swc_ecma_ast::{
    TsEntityName, TsFnOrConstructorType, TsFnParam, TsFnType, TsKeywordTypeKind, TsType,
    TsTypeOperatorOp, TsTypeRef, TsUnionOrIntersectionType, TsUnionType,
};

use crate::ir::TypeExpr;

/// Lower one type node into the supported subset.
pub fn lower(file: &ParsedFile, ty: &TsType) -> Result<TypeExpr> {
    match ty {
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsStringKeyword => Ok(TypeExpr::Str),
            TsKeywordTypeKind::TsNumberKeyword => Ok(TypeExpr::Num),
            TsKeywordTypeKind::TsBooleanKeyword => Ok(TypeExpr::Bool),
            TsKeywordTypeKind::TsVoidKeyword | TsKeywordTypeKind::TsUndefinedKeyword => {
                Ok(TypeExpr::Unit)
            }
            TsKeywordTypeKind::TsAnyKeyword | TsKeywordTypeKind::TsUnknownKeyword => {
                Ok(TypeExpr::Any)
            }
            _ => unsupported(file, ty),
        },
        TsType::TsTypeRef(reference) => lower_type_ref(file, reference),
        TsType::TsArrayType(array) => {
            Ok(TypeExpr::Array(Box::new(lower(file, &array.elem_type)?)))
        }
        TsType::TsTupleType(tuple) => {
            let elems = tuple
                .elem_types
                .iter()
                .map(|elem| lower(file, &elem.ty))
                .collect::<Result<Vec<_>>>()?;
            Ok(TypeExpr::Tuple(elems))
        }
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            lower_union(file, union)
        }
        TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(function)) => {
            lower_fn_type(file, function)
        }
        // Parentheses carry no meaning of their own.
        TsType::TsParenthesizedType(inner) => lower(file, &inner.type_ann),
        _ => unsupported(file, ty),
    }
}

fn lower_type_ref(file: &ParsedFile, reference: &TsTypeRef) -> Result<TypeExpr> {
    // Names pass through verbatim, no case conversion. Qualified names
    // (`vscode.Uri`) are copied as written; whether they resolve is the
    // consumer's problem, same as any other referenced type.
    let name = match &reference.type_name {
        TsEntityName::Ident(ident) => ident.sym.to_string(),
        TsEntityName::TsQualifiedName(_) => file.snippet(reference.type_name.span()),
    };
    let args = match &reference.type_params {
        Some(instantiation) => instantiation
            .params
            .iter()
            .map(|param| lower(file, param))
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };
    Ok(TypeExpr::Named(name, args))
}

/// Only two union shapes are in the supported subset:
/// `T | undefined` (optional) and `readonly T | ...` (borrow).
fn lower_union(file: &ParsedFile, union: &TsUnionType) -> Result<TypeExpr> {
    if union.types.len() != 2 {
        return unsupported_span(file, union.span);
    }

    if is_absent_marker(&union.types[1]) {
        return Ok(TypeExpr::Optional(Box::new(lower(file, &union.types[0])?)));
    }

    if let TsType::TsTypeOperator(operator) = &*union.types[0] {
        if operator.op == TsTypeOperatorOp::ReadOnly {
            return Ok(TypeExpr::Ref(Box::new(lower(file, &operator.type_ann)?)));
        }
    }

    unsupported_span(file, union.span)
}

/// `undefined` is the absent marker. `null` deliberately is not: a `null`
/// union is outside the subset and fails rather than silently becoming
/// `Option`.
fn is_absent_marker(ty: &TsType) -> bool {
    matches!(
        ty,
        TsType::TsKeywordType(keyword)
            if keyword.kind == TsKeywordTypeKind::TsUndefinedKeyword
    )
}

fn lower_fn_type(file: &ParsedFile, function: &TsFnType) -> Result<TypeExpr> {
    let mut params = Vec::with_capacity(function.params.len());
    for param in &function.params {
        match param {
            TsFnParam::Ident(binding) => {
                let ty = match &binding.type_ann {
                    Some(annotation) => lower(file, &annotation.type_ann)?,
                    None => TypeExpr::Any,
                };
                // The optional marker always wins, same as on top-level
                // parameters: `(payload?: T) => ..` takes `Option<T>`.
                if binding.id.optional {
                    params.push(TypeExpr::Optional(Box::new(ty)));
                } else {
                    params.push(ty);
                }
            }
            other => return unsupported_span(file, other.span()),
        }
    }
    let ret = lower(file, &function.type_ann.type_ann)?;
    Ok(TypeExpr::Func(params, Box::new(ret)))
}

fn unsupported(file: &ParsedFile, ty: &TsType) -> Result<TypeExpr> {
    unsupported_span(file, ty.span())
}

fn unsupported_span(file: &ParsedFile, span: swc_common::Span) -> Result<TypeExpr> {
    Err(Error::UnsupportedConstruct(file.snippet(span)))
}

/// Render one lowered type as Rust syntax. Total; never empty.
pub fn render(ty: &TypeExpr) -> String {
    match ty {
        TypeExpr::Str => "String".to_string(),
        TypeExpr::Num => "f64".to_string(),
        TypeExpr::Bool => "bool".to_string(),
        TypeExpr::Unit => "()".to_string(),
        TypeExpr::Any => "JsValue".to_string(),
        TypeExpr::Named(name, args) => {
            if args.is_empty() {
                name.clone()
            } else {
                let rendered = args.iter().map(render).collect::<Vec<_>>().join(", ");
                format!("{name}<{rendered}>")
            }
        }
        TypeExpr::Array(elem) => format!("Vec<{}>", render(elem)),
        TypeExpr::Tuple(elems) => {
            let rendered = elems.iter().map(render).collect::<Vec<_>>().join(", ");
            if elems.len() == 1 {
                // One-element tuples need the trailing comma.
                format!("({rendered},)")
            } else {
                format!("({rendered})")
            }
        }
        TypeExpr::Optional(inner) => format!("Option<{}>", render(inner)),
        TypeExpr::Ref(inner) => format!("&{}", render(inner)),
        TypeExpr::Func(params, ret) => {
            let rendered = params.iter().map(render).collect::<Vec<_>>().join(", ");
            if **ret == TypeExpr::Unit {
                format!("Box<dyn Fn({rendered})>")
            } else {
                format!("Box<dyn Fn({rendered}) -> {}>", render(ret))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_primitives() {
        assert_eq!(render(&TypeExpr::Str), "String");
        assert_eq!(render(&TypeExpr::Num), "f64");
        assert_eq!(render(&TypeExpr::Bool), "bool");
        assert_eq!(render(&TypeExpr::Unit), "()");
        assert_eq!(render(&TypeExpr::Any), "JsValue");
    }

    #[test]
    fn renders_named_with_arguments() {
        let ty = TypeExpr::Named("Thenable".into(), vec![TypeExpr::Str]);
        assert_eq!(render(&ty), "Thenable<String>");
        assert_eq!(render(&TypeExpr::Named("Uri".into(), vec![])), "Uri");
    }

    #[test]
    fn renders_containers() {
        assert_eq!(render(&TypeExpr::Array(Box::new(TypeExpr::Num))), "Vec<f64>");
        assert_eq!(
            render(&TypeExpr::Tuple(vec![TypeExpr::Str, TypeExpr::Num])),
            "(String, f64)"
        );
        assert_eq!(render(&TypeExpr::Tuple(vec![TypeExpr::Str])), "(String,)");
        assert_eq!(
            render(&TypeExpr::Optional(Box::new(TypeExpr::Str))),
            "Option<String>"
        );
        assert_eq!(render(&TypeExpr::Ref(Box::new(TypeExpr::Str))), "&String");
    }

    #[test]
    fn renders_function_types() {
        let ty = TypeExpr::Func(vec![TypeExpr::Num], Box::new(TypeExpr::Bool));
        assert_eq!(render(&ty), "Box<dyn Fn(f64) -> bool>");
        let unit_ret = TypeExpr::Func(vec![TypeExpr::Any], Box::new(TypeExpr::Unit));
        assert_eq!(render(&unit_ret), "Box<dyn Fn(JsValue)>");
    }

    #[test]
    fn every_variant_renders_non_empty() {
        let samples = [
            TypeExpr::Str,
            TypeExpr::Num,
            TypeExpr::Bool,
            TypeExpr::Unit,
            TypeExpr::Any,
            TypeExpr::Named("T".into(), vec![]),
            TypeExpr::Array(Box::new(TypeExpr::Str)),
            TypeExpr::Tuple(vec![TypeExpr::Str, TypeExpr::Num]),
            TypeExpr::Optional(Box::new(TypeExpr::Str)),
            TypeExpr::Ref(Box::new(TypeExpr::Str)),
            TypeExpr::Func(vec![], Box::new(TypeExpr::Unit)),
        ];
        for sample in &samples {
            assert!(!render(sample).is_empty());
        }
    }
}
