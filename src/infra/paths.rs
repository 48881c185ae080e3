// ============================================================
// Layer 6 — Path Helpers
// ============================================================
// Users often keep the dataset in their home folder and write
// paths like "~/data/3diqtt-v2-val.h5". The shell normally
// expands that; a path coming from a config file or a Rust
// string literal does not, so the store expands it itself.

use std::path::{Path, PathBuf};

/// Replace a leading `~` with the current user's home directory.
///
/// Only the bare `~` and `~/...` forms are expanded. `~user/...`
/// and paths without a tilde are returned untouched, as is every
/// path when no home directory can be determined.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
