use std::collections::HashSet;

use jstub_types::{TypeExpr, TypeVar};

use crate::pysafe::pysafe_package_path;

fn rsplit_once_dot(s: &str) -> (&str, &str) {
    match s.rfind('.') {
        Some(idx) => (&s[..idx], &s[idx + 1..]),
        None => ("", s),
    }
}

/// Render a [`TypeExpr`] to the text that goes in a stub file, threading
/// import emission and name mangling.
///
/// `classes_done` holds the display names of classes already emitted
/// earlier in the same package's output (or pre-seeded with every top-level
/// class in the package, so intra-package references always use the short
/// name regardless of processing order). `can_be_deferred` controls whether
/// a same-package reference to a class not yet emitted is still allowed to
/// use its short name (true for ordinary type positions, which `.pyi`
/// consumers resolve lazily) or must fall back to a fully qualified import
/// (false for supertypes, which Python's class statement resolves eagerly).
pub fn to_annotated_type(
    ty: &TypeExpr,
    package_name: &str,
    classes_done: &HashSet<String>,
    types_used: &mut HashSet<String>,
    imports_output: &mut Vec<String>,
    can_be_deferred: bool,
) -> String {
    let mut a_type = ty.name.clone();

    if a_type.contains('.') && a_type != "typing.Union" {
        a_type = pysafe_package_path(&a_type);
        types_used.insert(a_type.clone());
        let (parent, local) = rsplit_once_dot(&a_type);
        let parent = parent.to_string();
        let local = local.to_string();

        if parent == "builtins" {
            a_type = local;
        } else if parent == pysafe_package_path(package_name) {
            if classes_done.contains(&local) || can_be_deferred {
                a_type = local;
            } else {
                let own_package = a_type.split('.').next().unwrap_or("").to_string();
                imports_output.push(format!("import {own_package}"));
            }
        } else {
            imports_output.push(format!("import {parent}"));
        }
    }

    a_type = a_type.replace('$', ".");

    if !ty.type_args.is_empty() || a_type.is_empty() {
        let parts: Vec<String> = ty
            .type_args
            .iter()
            .map(|t| to_annotated_type(t, package_name, classes_done, types_used, imports_output, true))
            .collect();
        if a_type == "typing.Union" {
            return parts.join(" | ");
        }
        return format!("{a_type}[{}]", parts.join(", "));
    }

    a_type
}

/// Render a module-level `TypeVar` declaration line.
pub fn to_type_var_declaration(
    type_var: &TypeVar,
    package_name: &str,
    classes_done: &HashSet<String>,
    types_used: &mut HashSet<String>,
    imports_output: &mut Vec<String>,
) -> String {
    imports_output.push("import typing".to_string());
    match &type_var.bound {
        Some(bound) => {
            let bound_str =
                to_annotated_type(bound, package_name, classes_done, types_used, imports_output, true);
            format!(
                "{pyname} = typing.TypeVar('{pyname}', bound={bound})  # <{jname}>",
                pyname = type_var.python_name,
                bound = bound_str,
                jname = type_var.java_name
            )
        }
        None => format!(
            "{pyname} = typing.TypeVar('{pyname}')  # <{jname}>",
            pyname = type_var.python_name,
            jname = type_var.java_name
        ),
    }
}
