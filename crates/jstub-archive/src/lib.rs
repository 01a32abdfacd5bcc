//! Opening `.jar`/`.aar` archives and exploded class-file directories, and
//! enumerating the `.class` members they contain.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use zip::ZipArchive;

#[derive(Clone, Debug)]
enum Source {
    Path(PathBuf),
    InMemory(PathBuf, Vec<u8>),
}

/// A `.jar`, `.aar`, or directory input, abstracted over how its bytes are
/// read.
#[derive(Clone, Debug)]
pub struct Archive {
    source: Source,
}

impl Archive {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Path(path.into()),
        }
    }

    fn display_path(&self) -> &Path {
        match &self.source {
            Source::Path(p) => p,
            Source::InMemory(p, _) => p,
        }
    }

    /// Read a single file from the archive. Returns `Ok(None)` when absent.
    pub fn read(&self, name: &str) -> anyhow::Result<Option<Vec<u8>>> {
        if let Source::Path(path) = &self.source {
            if path.is_dir() {
                let candidate = path.join(name);
                if !candidate.exists() {
                    return Ok(None);
                }
                let mut buf = Vec::new();
                File::open(&candidate)
                    .with_context(|| format!("failed to open {}", candidate.display()))?
                    .read_to_end(&mut buf)
                    .with_context(|| format!("failed to read {}", candidate.display()))?;
                return Ok(Some(buf));
            }
        }

        let mut zip = self.open_zip()?;
        let result = match zip.by_name(name) {
            Ok(mut entry) => {
                let mut buf = Vec::new();
                entry.read_to_end(&mut buf).with_context(|| {
                    format!("failed to read {name} from {}", self.display_path().display())
                })?;
                Ok(Some(buf))
            }
            Err(zip::result::ZipError::FileNotFound) => Ok(None),
            Err(err) => Err(err).with_context(|| {
                format!("failed to read {name} from zip {}", self.display_path().display())
            }),
        };
        result
    }

    fn open_zip(&self) -> anyhow::Result<ZipArchive<Box<dyn ReadSeek>>> {
        let reader: Box<dyn ReadSeek> = match &self.source {
            Source::Path(path) => Box::new(
                File::open(path).with_context(|| format!("failed to open archive {}", path.display()))?,
            ),
            Source::InMemory(_, bytes) => Box::new(Cursor::new(bytes.clone())),
        };
        ZipArchive::new(reader)
            .with_context(|| format!("failed to read zip {}", self.display_path().display()))
    }

    /// Yield every `.class` member as `(member_path, bytes)`, with
    /// forward-slash-separated paths relative to the archive or directory
    /// root.
    pub fn class_entries(&self) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
        match &self.source {
            Source::Path(path) if path.is_dir() => directory_class_entries(path),
            _ => zip_class_entries(&mut self.open_zip()?, self.display_path()),
        }
    }

    /// Treat this archive as an `.aar`: extract its nested `classes.jar` and
    /// return an `Archive` over that jar's bytes. Fails if no `classes.jar`
    /// entry is present.
    pub fn nested_classes_jar(&self) -> anyhow::Result<Archive> {
        let bytes = self.read("classes.jar")?.ok_or_else(|| {
            anyhow::anyhow!(
                "no 'classes.jar' found in AAR '{}'",
                self.display_path().display()
            )
        })?;
        Ok(Archive {
            source: Source::InMemory(self.display_path().join("classes.jar"), bytes),
        })
    }
}

trait ReadSeek: Read + std::io::Seek {}
impl<T: Read + std::io::Seek> ReadSeek for T {}

fn zip_class_entries(
    zip: &mut ZipArchive<Box<dyn ReadSeek>>,
    display_path: &Path,
) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let mut out = Vec::new();
    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .with_context(|| format!("failed to read entry {i} of {}", display_path.display()))?;
        let name = entry.name().to_string();
        if !name.ends_with(".class") {
            continue;
        }
        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .with_context(|| format!("failed to read {name} from {}", display_path.display()))?;
        out.push((name, buf));
    }
    Ok(out)
}

fn directory_class_entries(dir: &Path) -> anyhow::Result<Vec<(String, Vec<u8>)>> {
    let mut out = Vec::new();
    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("class") {
            continue;
        }
        let relative = path
            .strip_prefix(dir)
            .with_context(|| format!("{} is not under {}", path.display(), dir.display()))?;
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        out.push((relative, bytes));
    }
    Ok(out)
}
