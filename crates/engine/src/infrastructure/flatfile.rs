//! Flat-file output helpers for the spawn and skill artifacts.

use std::io;
use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;

async fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

/// Truncates (or creates) the file, creating its parent directory when
/// missing. Called once per output file at the start of a batch run.
pub async fn init_file(path: &Path) -> io::Result<()> {
    ensure_parent_dir(path).await?;
    fs::write(path, "").await
}

/// Appends one line (newline-terminated) to the file, creating it when it
/// does not exist yet.
pub async fn append_line(path: &Path, line: &str) -> io::Result<()> {
    ensure_parent_dir(path).await?;

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(format!("{}\n", line.trim_end_matches('\n')).as_bytes())
        .await?;
    Ok(())
}
