use std::collections::HashSet;

use jstub_classfile::{AccessFlags, Error, MethodDescriptor, MethodSignature, MethodStub};
use jstub_translate::{
    convert_return_descriptor, convert_signature, descriptor_param_types, is_array_wrapper_type,
    make_type_vars, pysafe, to_annotated_type, to_type_var_declaration,
};
use jstub_types::{ArgSpec, MethodSig, TypeExpr, TypeVar};

use crate::param_names::param_names_from_locals;
use crate::typevars::eliminate_single_use_type_vars;
use crate::whitelist::can_return_none;

/// Render one overload group (all overloads sharing a Python-safe name, or
/// all `<init>` constructors).
///
/// Each member's descriptor/signature is parsed here, lazily, rather than
/// up front for the whole class: if any overload in this group fails to
/// parse, the error propagates and the caller skips the whole group (only
/// that group, not the rest of the class), matching how the original
/// generator isolates failures per overload group.
#[allow(clippy::too_many_arguments)]
pub fn generate_method_group(
    package_name: &str,
    method_name_py: &str,
    methods: &[&MethodStub],
    classes_done: &HashSet<String>,
    classes_used: &mut HashSet<String>,
    class_type_vars: &[TypeVar],
    class_name_dotted: &str,
    output: &mut Vec<String>,
    imports_output: &mut Vec<String>,
    scope_id_prefix: &str,
    is_constructor: bool,
) -> Result<(), Error> {
    let is_overloaded = methods.len() > 1;

    let mut parsed: Vec<(&MethodStub, MethodDescriptor, Option<MethodSignature>)> = Vec::with_capacity(methods.len());
    for m in methods {
        let (descriptor, signature) = m.parse()?;
        parsed.push((*m, descriptor, signature));
    }
    parsed.sort_by_key(|(m, pd, _)| (pd.params.len(), m.descriptor.clone()));

    let mut signatures = Vec::with_capacity(parsed.len());
    for (i, (m, parsed_descriptor, signature)) in parsed.into_iter().enumerate() {
        let flags = AccessFlags(m.access_flags);
        let is_static = flags.is_static();
        let is_varargs = flags.is_varargs();

        let overload_scope = if is_overloaded {
            format!("{scope_id_prefix}_{i}")
        } else {
            scope_id_prefix.to_string()
        };

        let usable_class_tvars: &[TypeVar] = if is_static { &[] } else { class_type_vars };

        let (mut method_type_vars, mut param_types, mut ret_type) = match &signature {
            Some(sig) => {
                let method_type_vars = make_type_vars(&sig.type_parameters, &overload_scope);
                let all_scope: Vec<TypeVar> =
                    method_type_vars.iter().cloned().chain(usable_class_tvars.iter().cloned()).collect();
                let param_types = sig
                    .parameters
                    .iter()
                    .map(|p| convert_signature(p, &all_scope, true, false, false))
                    .collect::<Vec<_>>();
                let ret_type = if is_constructor {
                    TypeExpr::simple("None")
                } else {
                    match &sig.return_type {
                        Some(rt) => convert_signature(rt, &all_scope, false, false, false),
                        None => TypeExpr::simple("None"),
                    }
                };
                (method_type_vars, param_types, ret_type)
            }
            None => {
                let param_types = descriptor_param_types(&parsed_descriptor);
                let ret_type = if is_constructor {
                    TypeExpr::simple("None")
                } else {
                    convert_return_descriptor(&parsed_descriptor.return_type)
                };
                (Vec::new(), param_types, ret_type)
            }
        };

        if !method_type_vars.is_empty() {
            let (kept, params, ret) = eliminate_single_use_type_vars(method_type_vars, param_types, ret_type);
            method_type_vars = kept;
            param_types = params;
            ret_type = ret;
        }

        let param_names = param_names_from_locals(&m.local_variables, is_static, &parsed_descriptor.params);

        let mut args: Vec<ArgSpec> = if is_static {
            Vec::new()
        } else {
            vec![ArgSpec {
                name: "self".to_string(),
                arg_type: None,
                var_args: false,
            }]
        };
        let param_count = param_types.len();
        for (idx, mut pt) in param_types.into_iter().enumerate() {
            let is_last = idx == param_count - 1;
            let is_va = is_varargs && is_last;
            if is_va {
                if pt.name == "java.chaquopy.JavaArray" && !pt.type_args.is_empty() {
                    pt = pt.type_args.into_iter().next().unwrap();
                } else if is_array_wrapper_type(&pt.name) {
                    // Leave as-is: rare surrogate-array varargs parameter.
                }
            }
            let arg_name = param_names
                .as_ref()
                .and_then(|names| names.get(idx))
                .filter(|n| !n.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("arg{}", idx + 1));
            args.push(ArgSpec {
                name: arg_name,
                arg_type: Some(pt),
                var_args: is_va,
            });
        }

        if !is_constructor && can_return_none(class_name_dotted, &m.name, &parsed_descriptor.params) {
            ret_type = TypeExpr::union(vec![ret_type, TypeExpr::simple("None")]);
        }

        signatures.push(MethodSig {
            name: method_name_py.to_string(),
            is_static,
            args,
            return_type: ret_type,
            type_vars: method_type_vars,
        });
    }

    for sig in &signatures {
        for tv in &sig.type_vars {
            output.push(to_type_var_declaration(tv, package_name, classes_done, classes_used, imports_output));
        }
    }

    for sig in &signatures {
        if is_overloaded {
            imports_output.push("import typing".to_string());
            output.push("@typing.overload".to_string());
        }
        if sig.is_static {
            output.push("@staticmethod".to_string());
        }

        let mut sig_parts: Vec<String> = Vec::with_capacity(sig.args.len());
        for (idx, arg) in sig.args.iter().enumerate() {
            if arg.name == "self" && arg.arg_type.is_none() {
                sig_parts.push("self".to_string());
                continue;
            }
            let safe_name = pysafe(&arg.name).unwrap_or_else(|| format!("invalidArgName{idx}"));
            let mut part = if arg.var_args { format!("*{safe_name}") } else { safe_name };
            if let Some(ty) = &arg.arg_type {
                part.push_str(": ");
                part.push_str(&to_annotated_type(ty, package_name, classes_done, classes_used, imports_output, true));
            }
            sig_parts.push(part);
        }

        let has_regular_params = sig.args.iter().any(|a| a.name != "self" && !a.var_args);
        if has_regular_params {
            let varargs_idx = sig.args.iter().position(|a| a.var_args).unwrap_or(sig.args.len());
            sig_parts.insert(varargs_idx, "/".to_string());
        }

        if is_constructor {
            output.push(format!("def __init__({}) -> None: ...", sig_parts.join(", ")));
        } else {
            let Some(fn_name) = pysafe(&sig.name) else { continue };
            let ret_str = to_annotated_type(&sig.return_type, package_name, classes_done, classes_used, imports_output, true);
            output.push(format!("def {fn_name}({}) -> {ret_str}: ...", sig_parts.join(", ")));
        }
    }

    Ok(())
}
