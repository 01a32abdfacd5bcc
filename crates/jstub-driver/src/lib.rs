#![forbid(unsafe_code)]

mod bindings;
mod input;
mod package;
mod worker;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use jstub_types::PackageGroup;

pub use bindings::{BindingsInjector, NoopBindingsInjector};

/// Convert one or more `.jar`/`.aar` files or directories of `.class` files
/// into a tree of `__init__.pyi` files under `output_dir`.
///
/// All inputs are read and grouped by package before any output is written,
/// so a bad input fails before anything is deleted. When the same package
/// appears in more than one input, classes from the later input win. Each
/// package is then processed independently and in parallel; if `clean` is
/// set, `output_dir` is removed first.
pub fn convert_to_python_stubs(
    input_paths: &[PathBuf],
    output_dir: &Path,
    clean: bool,
    bindings: Option<&dyn BindingsInjector>,
) -> anyhow::Result<()> {
    let absolute = std::path::absolute(output_dir)
        .with_context(|| format!("failed to resolve output dir {}", output_dir.display()))?;
    if absolute.components().count() < 3 {
        bail!(
            "output_dir '{}' is dangerously close to the filesystem root, refusing to delete it",
            output_dir.display()
        );
    }

    let mut packages: BTreeMap<String, PackageGroup> = BTreeMap::new();
    for input_path in input_paths {
        let entries = input::read_input(input_path)?;
        package::collect_packages(entries, &mut packages);
    }

    if clean {
        let _ = std::fs::remove_dir_all(output_dir);
    }

    if packages.keys().any(|p| p.starts_with("java/")) {
        packages.entry("java".to_string()).or_default();
    }

    use rayon::prelude::*;
    let failures: Vec<(String, anyhow::Error)> = packages
        .par_iter()
        .filter_map(|(package_dir, group)| {
            worker::process_package(package_dir, group, output_dir, bindings)
                .err()
                .map(|e| (package_dir.clone(), e))
        })
        .collect();

    for (package_dir, err) in &failures {
        tracing::error!(package = package_dir.as_str(), error = %err, "package processing failed");
    }

    Ok(())
}
