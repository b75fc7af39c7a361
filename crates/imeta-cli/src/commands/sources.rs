//! Manifest discovery and settings loading shared by commands.

use std::path::{Path, PathBuf};

use imeta_core::config::InterfaceConfig;
use walkdir::WalkDir;

/// File name of the interface settings file, never treated as a manifest.
pub const CONFIG_FILE: &str = "imeta.json";

/// Settings from `--config`, else `./imeta.json`, else built-in defaults.
pub fn load_defaults(config: Option<&Path>) -> InterfaceConfig {
    match config {
        Some(path) => InterfaceConfig::load_file(path),
        None => std::env::current_dir()
            .map(|cwd| InterfaceConfig::load(&cwd))
            .unwrap_or_default(),
    }
}

/// Expand `paths` into manifest files: files are taken as given,
/// directories are searched recursively for `*.json` (sorted, settings
/// files excluded).
pub fn manifest_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(format!("no such file or directory: {}", path.display()));
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| match e {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("skipping directory entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|p| is_manifest(p))
            .collect();
        found.sort();
        tracing::debug!(dir = %path.display(), count = found.len(), "discovered manifests");
        files.extend(found);
    }
    Ok(files)
}

fn is_manifest(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && path.file_name().is_some_and(|name| name != CONFIG_FILE)
}
