use std::path::{Path, PathBuf};

/// Files read by [`load_dotenv_files`], in load order
pub const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env.local` and then `.env` from `dir`.
///
/// A variable that is already set is never overwritten, so the process
/// environment beats `.env.local`, which beats `.env`. Missing files are
/// skipped. Returns the files that were loaded.
pub fn load_dotenv_files(dir: &Path) -> Vec<PathBuf> {
    DOTENV_FILES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| dotenvy::from_path(path).is_ok())
        .collect()
}
