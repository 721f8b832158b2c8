use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// JSON files under `root`, sorted so load order and the snapshot digest are
/// deterministic. A missing directory yields an empty list.
pub fn json_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.extension()
                .map(|extension| extension == "json")
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    files
}
