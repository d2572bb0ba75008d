//! Path utilities: tilde expansion and resolution of CLI-supplied paths.

use std::env;
use std::io;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Resolve a user-supplied file argument: expand `~`, anchor relative
/// paths at the current working directory.
pub fn resolve_cli_path(path: &str) -> io::Result<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Ok(env::current_dir()?.join(p))
    }
}
