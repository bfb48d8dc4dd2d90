/*!
Migrations directory lookup

*/
use std::env;
use std::path::{Path, PathBuf};

use crate::errors::*;


/// Return the absolute form of `dir`, resolved against the current
/// directory, after confirming it exists and is a directory.
pub fn resolve_directory<T: AsRef<Path>>(dir: T) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let abs = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        let cwd = env::current_dir()
            .chain_err(|| format_err!(ErrorKind::Directory,
                                      "Unable to resolve `{}`: current directory is unavailable", dir.display()))?;
        cwd.join(dir)
    };

    if !abs.exists() {
        bail_fmt!(ErrorKind::Directory, "Migrations directory not found: {}", abs.display());
    }
    if !abs.is_dir() {
        bail_fmt!(ErrorKind::Directory, "Not a directory: {}", abs.display());
    }
    Ok(abs)
}


/// Resolve `dir` and make it the process working directory.
///
/// Returns the absolute path so callers can hand it to the engine
/// directly instead of relying on the working directory.
pub fn enter_directory<T: AsRef<Path>>(dir: T) -> Result<PathBuf> {
    let abs = resolve_directory(dir)?;
    env::set_current_dir(&abs)
        .chain_err(|| format_err!(ErrorKind::Directory, "Unable to enter {}", abs.display()))?;
    info!("Entered migrations directory: {}", abs.display());
    Ok(abs)
}
