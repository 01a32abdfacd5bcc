use std::collections::BTreeMap;
use std::path::Path;

use jstub_types::PackageGroup;

/// Group `(relative_class_path, bytecode)` pairs by parent directory (Java
/// package). A later entry for the same `(package, class stem)` pair
/// overwrites an earlier one, so calling this repeatedly over several
/// inputs implements "last input wins" on a per-class basis.
pub fn collect_packages(
    entries: Vec<(String, Vec<u8>)>,
    packages: &mut BTreeMap<String, PackageGroup>,
) {
    for (class_file, data) in entries {
        let package_dir = Path::new(&class_file)
            .parent()
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string());
        let stem = class_file.strip_suffix(".class").unwrap_or(&class_file).to_string();

        let group = packages.entry(package_dir).or_default();
        if !group.class_files.contains(&class_file) {
            group.class_files.push(class_file.clone());
        }
        group.class_data.insert(stem, data);
    }
}
