//! Flat JSON document store.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use super::{PatientMap, PatientStore, StoreResult};

/// Stores every patient in a single pretty-printed JSON object keyed by id.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl PatientStore for JsonFileStore {
    fn load(&self) -> StoreResult<PatientMap> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, starting empty", self.path.display());
                return Ok(PatientMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes to a sibling temp file and renames it over the target, so a
    /// crash mid-write leaves the previous document intact.
    fn save(&self, patients: &PatientMap) -> StoreResult<()> {
        let dir = self.dir();
        fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        {
            let mut ser = Serializer::with_formatter(&mut file, PrettyFormatter::with_indent(b"    "));
            patients.serialize(&mut ser)?;
        }
        file.write_all(b"\n")?;

        // The temp file starts owner-only; keep the document's existing mode.
        let permissions = match fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => new_document_permissions(),
            Err(e) => return Err(e.into()),
        };
        if let Some(permissions) = permissions {
            file.as_file().set_permissions(permissions)?;
        }
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        debug!("Wrote {} patients to {}", patients.len(), self.path.display());
        Ok(())
    }
}

#[cfg(unix)]
fn new_document_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_document_permissions() -> Option<fs::Permissions> {
    None
}
