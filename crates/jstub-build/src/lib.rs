#![forbid(unsafe_code)]

mod class;
mod method;
mod param_names;
mod typevars;
mod whitelist;

use std::collections::{HashMap, HashSet};

pub use class::convert_class_to_stub;
pub use jstub_types::ClassStubFragment;
pub use whitelist::can_return_none;

/// Build a single class's stub fragment with no parent type-var scope and
/// no sibling class data — the entry point used when a class is processed
/// on its own, outside of a package driver run.
pub fn build_class_stub(class_data: &[u8]) -> Result<ClassStubFragment, jstub_classfile::Error> {
    let mut classes_done = HashSet::new();
    let mut classes_used = HashSet::new();
    convert_class_to_stub(class_data, None, &mut classes_done, &mut classes_used, None)
}

/// Build a class's stub fragment with access to sibling class bytecode
/// (keyed by internal name) so nested classes can be resolved and recursed
/// into, pre-seeding `classes_done` so forward references within the same
/// package resolve to short names regardless of processing order.
pub fn build_class_stub_with_siblings(
    class_data: &[u8],
    all_class_data: &HashMap<String, Vec<u8>>,
    classes_done: &mut HashSet<String>,
    classes_used: &mut HashSet<String>,
) -> Result<ClassStubFragment, jstub_classfile::Error> {
    convert_class_to_stub(class_data, Some(all_class_data), classes_done, classes_used, None)
}
