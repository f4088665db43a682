/// Output placement: generated text goes either to stdout or, atomically,
/// to a file. Callers render the full text first so a failed pass writes
/// nothing.
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Replace `path` with `text`. The text is written to a temporary file in
/// the same directory and renamed over `path`, so readers never observe a
/// partial file.
pub fn write_atomic(path: &Path, text: &str) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote output");
    Ok(())
}

/// Write `text` to stdout in one call.
pub fn write_stdout(text: &str) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(text.as_bytes())?;
    lock.flush()
}
