use std::collections::{HashMap, HashSet};

use jstub_types::{TypeExpr, TypeVar};

fn count_uses(ty: &TypeExpr, names: &HashSet<&str>, counts: &mut HashMap<String, usize>) {
    if names.contains(ty.name.as_str()) {
        *counts.entry(ty.name.clone()).or_insert(0) += 1;
    }
    for arg in &ty.type_args {
        count_uses(arg, names, counts);
    }
}

fn substitute(ty: &TypeExpr, subs: &HashMap<String, TypeExpr>) -> TypeExpr {
    if let Some(replacement) = subs.get(&ty.name) {
        return replacement.clone();
    }
    TypeExpr {
        name: ty.name.clone(),
        type_args: ty.type_args.iter().map(|a| substitute(a, subs)).collect(),
    }
}

/// Drop method-level type variables that occur at most once across all
/// parameter types and the return type — they add no constraint and only
/// create noise in the rendered stub. Each dropped variable is replaced by
/// its bound, or by `java.lang.Object` if unbounded.
pub fn eliminate_single_use_type_vars(
    type_vars: Vec<TypeVar>,
    mut params: Vec<TypeExpr>,
    mut ret: TypeExpr,
) -> (Vec<TypeVar>, Vec<TypeExpr>, TypeExpr) {
    let tv_names: HashSet<&str> = type_vars.iter().map(|tv| tv.python_name.as_str()).collect();
    let mut counts = HashMap::new();
    for p in &params {
        count_uses(p, &tv_names, &mut counts);
    }
    count_uses(&ret, &tv_names, &mut counts);

    let mut subs = HashMap::new();
    let mut kept = Vec::new();
    for tv in type_vars {
        if *counts.get(tv.python_name.as_str()).unwrap_or(&0) <= 1 {
            let replacement = tv.bound.clone().unwrap_or_else(|| TypeExpr::simple("java.lang.Object"));
            subs.insert(tv.python_name.clone(), replacement);
        } else {
            kept.push(tv);
        }
    }

    if !subs.is_empty() {
        params = params.iter().map(|p| substitute(p, &subs)).collect();
        ret = substitute(&ret, &subs);
    }

    (kept, params, ret)
}
