//! Some utilities

use std::path::{Path, PathBuf};

use ftlog::{
    LevelFilter, LoggerGuard,
    appender::{FileAppender, Period},
};

/// Configures the logger.
///
/// Logs go to `logs/<file_name>` under the current directory, rotated daily. Warnings from the appender itself go to a sibling file with an `-err` suffix.
///
/// # Errors
///
/// - If a logs directory could not be located/created.
/// - If the file name has no stem.
/// - If the logger could not be initialized.
pub fn configure_logger(file_name: &str) -> Result<(LoggerGuard, PathBuf), String> {
    let root_dir = PathBuf::from(".").canonicalize().map_err(|e| e.to_string())?;
    let logs_dir = root_dir.join("logs");
    if !logs_dir.exists() {
        std::fs::create_dir(&logs_dir).map_err(|e| e.to_string())?;
    }
    let log_path = logs_dir.join(file_name);

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_stem = log_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| format!("Invalid log file name: {file_name}"))?;
    let err_path = log_path.with_file_name(format!("{err_stem}-err"));

    let guard = ftlog::Builder::new()
        .max_log_level(LevelFilter::Info)
        .root(writer)
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Warn)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}

/// The path of the positions snapshot taken before the given tick.
pub fn snapshot_path<P: AsRef<Path>>(out_dir: P, step: usize) -> PathBuf {
    out_dir.as_ref().join(format!("positions-{step:06}.npy"))
}

/// Creates the output directory if it does not exist.
///
/// # Errors
///
/// - If `out_dir` exists but is not a directory.
/// - If the directory could not be created.
pub fn ensure_dir<P: AsRef<Path>>(out_dir: P) -> Result<(), String> {
    let out_dir = out_dir.as_ref();
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(format!("Output path {} is not a directory", out_dir.display()));
    }
    std::fs::create_dir_all(out_dir).map_err(|e| format!("Failed to create {}: {e}", out_dir.display()))
}

/// A directory under the system temp dir that is emptied on creation and removed when dropped, even if a test panics.
#[cfg(test)]
pub struct ScratchDir(PathBuf);

#[cfg(test)]
impl ScratchDir {
    /// Creates a fresh, empty path for the named test, removing anything a previous run left behind.
    pub fn new(name: &str) -> Result<Self, String> {
        let path = std::env::temp_dir().join(format!("cloth-shell-{name}-{}", std::process::id()));
        if path.exists() {
            std::fs::remove_dir_all(&path).map_err(|e| e.to_string())?;
        }
        Ok(Self(path))
    }

    /// Returns the path of the directory.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
impl Drop for ScratchDir {
    fn drop(&mut self) {
        if self.0.exists() {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }
}
