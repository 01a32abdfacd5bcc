use jstub_classfile::{
    ClassTypeSignature, FieldType, MethodDescriptor, ReturnType, TypeArgument, TypeParameter,
    TypeSignature,
};
use jstub_types::{TypeExpr, TypeVar};

use crate::primitives::{base_type_name, parameter_to_array_type, primitive_by_dotted_name};

/// Translate a basic Java type name to its Python-visible surrogate, applying
/// the implicit-conversion union rules.
///
/// This is applied uniformly regardless of where the type appears (field,
/// argument, return type, supertype, …); `is_argument` additionally widens
/// the result to accept the types JPype-style implicit conversions accept,
/// `is_array_param` selects the surrogate primitive type used for array
/// elements, and `is_type_arg` selects the boxed type used inside a generic
/// type argument list.
pub fn translate_type_name(
    name: &str,
    type_args: Vec<TypeExpr>,
    is_argument: bool,
    is_array_param: bool,
    is_type_arg: bool,
) -> TypeExpr {
    let mut union = Vec::new();

    if let Some(primitive) = primitive_by_dotted_name(name) {
        if is_array_param {
            union.push(TypeExpr::simple(primitive.python_primitive));
        } else if is_type_arg {
            union.push(TypeExpr::simple(primitive.java_object));
        } else {
            union.push(TypeExpr::simple(primitive.python_type));
        }
        if is_argument {
            union.push(TypeExpr::simple(primitive.python_primitive));
            union.push(TypeExpr::simple(primitive.java_object));
        }
    }

    if name == "java.lang.String" {
        if is_array_param || is_type_arg {
            union.push(TypeExpr::simple("java.lang.String"));
        } else {
            union.push(TypeExpr::simple("str"));
            if is_argument {
                union.push(TypeExpr::simple("java.lang.String"));
            }
        }
    }

    if name == "java.lang.Class" {
        union.push(TypeExpr::generic("typing.Type", type_args.clone()));
    }

    if name == "java.lang.Object" {
        union.push(TypeExpr::simple("java.lang.Object"));
        if is_argument {
            union.push(TypeExpr::simple("int"));
            union.push(TypeExpr::simple("bool"));
            union.push(TypeExpr::simple("float"));
            union.push(TypeExpr::simple("str"));
        }
    }

    match union.len() {
        0 => TypeExpr::generic(name, type_args),
        1 => union.into_iter().next().unwrap(),
        _ => TypeExpr::union(union),
    }
}

fn dotted_class_name(cts: &ClassTypeSignature) -> String {
    let mut out = String::new();
    if !cts.package.is_empty() {
        out.push_str(&cts.package.join("."));
        out.push('.');
    }
    for (idx, seg) in cts.segments.iter().enumerate() {
        if idx > 0 {
            out.push('.');
        }
        out.push_str(&seg.name);
    }
    out
}

fn resolve_type_variable(name: &str, scope: &[TypeVar]) -> TypeExpr {
    match scope.iter().find(|tv| tv.java_name == name) {
        Some(tv) => TypeExpr::simple(tv.python_name.clone()),
        None => TypeExpr::simple(name.to_string()),
    }
}

fn wrap_array_element(elem: TypeExpr) -> TypeExpr {
    match parameter_to_array_type(&elem.name) {
        Some(array_type) => TypeExpr::simple(array_type),
        None => TypeExpr::generic("java.chaquopy.JavaArray", vec![elem]),
    }
}

fn convert_type_argument(arg: &TypeArgument, scope: &[TypeVar]) -> TypeExpr {
    match arg {
        TypeArgument::Any => TypeExpr::simple("java.lang.Object"),
        TypeArgument::Exact(inner) => convert_signature(inner, scope, false, false, true),
        TypeArgument::Extends(inner) | TypeArgument::Super(inner) => {
            convert_signature(inner, scope, false, false, false)
        }
    }
}

/// Convert a JVM generic-signature type into its Python-visible surrogate.
///
/// `scope` resolves type-variable references (`T...;`) to their mangled
/// Python names; an unresolved variable is passed through by its raw name
/// (this happens for a class's own formal type parameters, which are not
/// yet in scope while their own bounds are parsed).
pub fn convert_signature(
    ty: &TypeSignature,
    scope: &[TypeVar],
    is_argument: bool,
    is_array_param: bool,
    is_type_arg: bool,
) -> TypeExpr {
    match ty {
        TypeSignature::Base(base) => {
            translate_type_name(base_type_name(*base), vec![], is_argument, is_array_param, is_type_arg)
        }
        TypeSignature::Array(inner) => {
            wrap_array_element(convert_signature(inner, scope, false, true, false))
        }
        TypeSignature::TypeVariable(name) => resolve_type_variable(name, scope),
        TypeSignature::Class(cts) => {
            let dotted = dotted_class_name(cts);
            let type_args = cts
                .segments
                .first()
                .map(|seg| {
                    seg.type_arguments
                        .iter()
                        .map(|arg| convert_type_argument(arg, scope))
                        .collect()
                })
                .unwrap_or_default();
            translate_type_name(&dotted, type_args, is_argument, is_array_param, is_type_arg)
        }
    }
}

fn convert_field_descriptor(
    ty: &FieldType,
    is_argument: bool,
    is_array_param: bool,
) -> TypeExpr {
    match ty {
        FieldType::Base(base) => {
            translate_type_name(base_type_name(*base), vec![], is_argument, is_array_param, false)
        }
        FieldType::Object(internal_name) => translate_type_name(
            &internal_name.replace('/', "."),
            vec![],
            is_argument,
            is_array_param,
            false,
        ),
        FieldType::Array(inner) => wrap_array_element(convert_field_descriptor(inner, false, true)),
    }
}

/// Convert a plain (non-generic) descriptor type, used when no `Signature`
/// attribute is present on the class member.
pub fn convert_descriptor(ty: &FieldType, is_argument: bool) -> TypeExpr {
    convert_field_descriptor(ty, is_argument, false)
}

pub fn convert_return_descriptor(ty: &ReturnType) -> TypeExpr {
    match ty {
        ReturnType::Void => TypeExpr::simple("None"),
        ReturnType::Type(ft) => convert_descriptor(ft, false),
    }
}

pub fn descriptor_param_types(desc: &MethodDescriptor) -> Vec<TypeExpr> {
    desc.params.iter().map(|p| convert_descriptor(p, true)).collect()
}

/// Build the `TypeVar` declarations for a class's or method's formal type
/// parameters. `scope_id` becomes the mangled name's scope prefix
/// (`_{scope_id}__{java_name}`); bounds that resolve to plain
/// `java.lang.Object` are dropped, matching an implicit (unbounded) type
/// parameter.
pub fn make_type_vars(params: &[TypeParameter], scope_id: &str) -> Vec<TypeVar> {
    params
        .iter()
        .map(|p| {
            let bound = p
                .class_bound
                .as_ref()
                .map(|b| convert_signature(b, &[], false, false, false))
                .filter(|te| te.name != "java.lang.Object");
            TypeVar {
                java_name: p.name.clone(),
                python_name: format!("_{scope_id}__{}", p.name),
                bound,
            }
        })
        .collect()
}
