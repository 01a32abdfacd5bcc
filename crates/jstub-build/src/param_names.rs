use std::collections::HashMap;

use jstub_classfile::{BaseType, FieldType, LocalVariable};

/// Recover real parameter names from a method's `LocalVariableTable`.
///
/// Slot 0 holds `this` for instance methods, so parameters start at slot 1;
/// static methods start at slot 0. `long`/`double` parameters occupy two
/// slots. Returns `None` when no debug info is present, or when every
/// recovered name is empty (e.g. a table that only covers `this`).
pub fn param_names_from_locals(
    locals: &[LocalVariable],
    is_static: bool,
    params: &[FieldType],
) -> Option<Vec<String>> {
    if locals.is_empty() {
        return None;
    }
    let by_slot: HashMap<u16, &str> = locals.iter().map(|lv| (lv.index, lv.name.as_str())).collect();

    let mut names = Vec::with_capacity(params.len());
    let mut slot: u16 = if is_static { 0 } else { 1 };
    for param in params {
        names.push(by_slot.get(&slot).map(|s| s.to_string()).unwrap_or_default());
        slot += if matches!(param, FieldType::Base(BaseType::Long) | FieldType::Base(BaseType::Double)) {
            2
        } else {
            1
        };
    }

    if names.iter().any(|n| !n.is_empty()) {
        Some(names)
    } else {
        None
    }
}
