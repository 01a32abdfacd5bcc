#![forbid(unsafe_code)]

use std::collections::HashMap;

/// A Python-visible type expression.
///
/// `name` is a dotted name (possibly empty, for a bare union placeholder);
/// `typing.Union` always carries two or more `type_args`. A dotted name
/// always refers to a fully-qualified external entity — Python builtins use
/// their own `builtins.` prefix or a bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    pub name: String,
    pub type_args: Vec<TypeExpr>,
}

impl TypeExpr {
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, type_args: Vec<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            type_args,
        }
    }

    pub fn union(mut members: Vec<TypeExpr>) -> Self {
        if members.len() == 1 {
            return members.remove(0);
        }
        Self {
            name: "typing.Union".to_string(),
            type_args: members,
        }
    }
}

/// Declaration of a generic parameter.
///
/// `python_name` is unique within the stub file that declares it and is
/// built from a scope prefix plus `java_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeVar {
    pub java_name: String,
    pub python_name: String,
    pub bound: Option<TypeExpr>,
}

/// One method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: String,
    pub arg_type: Option<TypeExpr>,
    pub var_args: bool,
}

/// One overload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSig {
    pub name: String,
    pub is_static: bool,
    pub args: Vec<ArgSpec>,
    pub return_type: TypeExpr,
    pub type_vars: Vec<TypeVar>,
}

/// Rendered text for one class, ready to be spliced into a package stub file.
///
/// `type_vars` holds already-rendered `TypeVar` declaration lines (module
/// level, emitted before any class body); `code` holds the class body text,
/// including nested classes indented in place.
#[derive(Debug, Clone, Default)]
pub struct ClassStubFragment {
    pub imports: Vec<String>,
    pub type_vars: Vec<String>,
    pub code: Vec<String>,
}

impl ClassStubFragment {
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.type_vars.is_empty() && self.code.is_empty()
    }
}

/// One Java package's class files, grouped for a single driver worker.
#[derive(Debug, Clone, Default)]
pub struct PackageGroup {
    /// Class file paths relative to the input root, e.g. `java/util/List.class`.
    pub class_files: Vec<String>,
    /// Class bytecode keyed by internal name without the `.class` suffix,
    /// e.g. `java/util/List`.
    pub class_data: HashMap<String, Vec<u8>>,
}

impl PackageGroup {
    /// Class files with no `$` in their file stem — the ones processed at the
    /// top level; inner classes are only reached recursively from these.
    pub fn top_level_files(&self) -> Vec<&str> {
        self.class_files
            .iter()
            .filter(|f| {
                let stem = f.rsplit('/').next().unwrap_or(f);
                let stem = stem.strip_suffix(".class").unwrap_or(stem);
                !stem.contains('$')
            })
            .map(String::as_str)
            .collect()
    }
}
