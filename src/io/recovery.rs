//! Append-only recovery log.
//!
//! The TUI owns the terminal, so diagnostics that would normally go to
//! stderr land in `.recovery.log` next to the store file instead. Entries
//! are plain timestamped lines; the file is safe to delete at any time.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

/// Return the path to the recovery log file.
pub fn recovery_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(".recovery.log")
}

/// Append a timestamped entry to the recovery log. Best-effort: logging
/// failures are swallowed, since the log is itself the fallback channel.
pub fn log_recovery(data_dir: &Path, context: &str, detail: &str) {
    let _ = try_log(data_dir, context, detail);
}

fn try_log(data_dir: &Path, context: &str, detail: &str) -> io::Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(recovery_log_path(data_dir))?;
    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    writeln!(file, "{timestamp} [{context}] {detail}")
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
