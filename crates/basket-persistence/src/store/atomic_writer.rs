use basket_core::BasketResult;
use std::path::Path;
use tokio::fs;

/// File writer using the write-to-temp-then-rename pattern, so a crash
/// mid-write leaves the previous list intact instead of a truncated file.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write `data` to `path` atomically. The temp file is created in the
    /// target's directory so the rename stays on one filesystem.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> BasketResult<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp.path().to_path_buf();

        fs::write(&temp_path, data).await?;
        fs::rename(&temp_path, path).await?;

        tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    pub async fn read_all(path: &Path) -> BasketResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}
