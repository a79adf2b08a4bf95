// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::info;

use crate::config::ExportOptions;
use crate::error::{Error, Result};

/// `{ "size": n, "data": [...] }`
#[derive(Serialize)]
pub struct Export<'a, T> {
    pub size: usize,
    pub data: &'a [T],
}

impl<'a, T> Export<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { size: data.len(), data }
    }
}

/// Pretty JSON (2-space indent) of the export document.
pub fn to_export_string<T: Serialize>(data: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Export::new(data))?)
}

/// Write the export document to `export.out_path()` and return that path.
///
/// The document is serialized before anything touches the disk, then written
/// to a temporary sibling and renamed into place, so a failed run never
/// leaves a partial file behind.
pub fn write_export<T: Serialize>(export: &ExportOptions, data: &[T]) -> Result<PathBuf> {
    let contents = to_export_string(data)?;

    let path = export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let tmp = tmp_path(&path);
    fs::write(&tmp, contents).map_err(|e| Error::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, &path) {
        let _ = fs::remove_file(&tmp);
        return Err(Error::io(&path, e));
    }

    info!(path = %path.display(), size = data.len(), "Export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
