use std::collections::HashSet;
use std::fs;
use std::path::Path;

use jstub_build::convert_class_to_stub;
use jstub_types::PackageGroup;

use crate::bindings::BindingsInjector;

/// Process one Java package: build every top-level class's stub fragment,
/// combine their imports and code, and write `<output>/<package>/__init__.pyi`.
///
/// A single class that fails to parse is logged and skipped; it does not
/// abort the rest of the package.
pub fn process_package(
    package_dir: &str,
    group: &PackageGroup,
    output_dir: &Path,
    bindings: Option<&dyn BindingsInjector>,
) -> anyhow::Result<()> {
    let top_level = group.top_level_files();
    tracing::info!(
        package = package_dir,
        top_level = top_level.len(),
        total = group.class_files.len(),
        "processing package"
    );

    let mut classes_done: HashSet<String> = top_level
        .iter()
        .map(|f| {
            let stem = f.rsplit('/').next().unwrap_or(f);
            stem.strip_suffix(".class").unwrap_or(stem).to_string()
        })
        .collect();
    let mut classes_used: HashSet<String> = HashSet::new();
    let mut combined_imports: Vec<String> = Vec::new();
    let mut combined_code: Vec<String> = Vec::new();

    let mut sorted_top_level: Vec<&str> = top_level;
    sorted_top_level.sort_unstable();

    for class_file in sorted_top_level {
        let stem = class_file.strip_suffix(".class").unwrap_or(class_file);
        let Some(data) = group.class_data.get(stem) else {
            tracing::warn!(class = class_file, "class data missing from package group");
            continue;
        };
        match convert_class_to_stub(data, Some(&group.class_data), &mut classes_done, &mut classes_used, None) {
            Ok(fragment) => {
                combined_imports.extend(fragment.imports);
                combined_code.extend(fragment.type_vars);
                combined_code.extend(fragment.code);
            }
            Err(err) => {
                tracing::warn!(class = class_file, error = %err, "skipping class");
            }
        }
    }

    if package_dir == "java" {
        if let Some(injector) = bindings {
            injector.inject(&mut combined_imports, &mut combined_code);
        }
    }

    combined_imports.sort();
    combined_imports.dedup();

    let output_file = output_dir.join(package_dir).join("__init__.pyi");
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut contents = String::new();
    for imp in &combined_imports {
        contents.push_str(imp);
        contents.push('\n');
    }
    contents.push_str("\n\n");
    for line in &combined_code {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(&output_file, contents)?;

    Ok(())
}
