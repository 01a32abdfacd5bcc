use std::path::Path;

use anyhow::{anyhow, Context};
use jstub_archive::Archive;

/// Read every `.class` member out of one `.jar`, `.aar`, or directory input.
pub fn read_input(input_path: &Path) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    if input_path.is_dir() {
        return Archive::new(input_path)
            .class_entries()
            .with_context(|| format!("failed to read directory {}", input_path.display()));
    }

    let suffix = input_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match suffix.as_deref() {
        Some("jar") => Archive::new(input_path)
            .class_entries()
            .with_context(|| format!("failed to read jar {}", input_path.display())),
        Some("aar") => {
            let jar = Archive::new(input_path)
                .nested_classes_jar()
                .with_context(|| format!("failed to extract classes.jar from {}", input_path.display()))?;
            jar.class_entries()
                .with_context(|| format!("failed to read classes.jar inside {}", input_path.display()))
        }
        _ => Err(anyhow!(
            "unsupported input format '{}'; expected '.jar', '.aar', or a directory",
            input_path.display()
        )),
    }
}
