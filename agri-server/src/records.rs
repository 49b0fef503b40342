//! One-file-per-submission record storage.

use chrono::Utc;
use log::warn;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// File name prefix for stored submissions.
pub const RECORD_PREFIX: &str = "farmerInfo_";

/// Attempts before giving up on finding an unused file name.
const MAX_ATTEMPTS: u32 = 8;

/// Writes each payload to a new file in `dir`.
///
/// Names are `farmerInfo_<unix-millis>-<seq>.json`. `seq` is a process-wide
/// counter, so two requests in the same millisecond still get distinct
/// names; files are created with `create_new`, so a name left over from an
/// earlier process is skipped rather than overwritten. A record whose write
/// fails part way is deleted again; complete records are never read back or
/// removed.
#[derive(Debug)]
pub struct RecordWriter {
    dir: PathBuf,
    seq: AtomicU64,
}

impl RecordWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seq: AtomicU64::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_path(&self) -> PathBuf {
        let millis = Utc::now().timestamp_millis();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!("{}{}-{}.json", RECORD_PREFIX, millis, seq))
    }

    /// Store `payload` pretty-printed as a new record and return its path.
    pub async fn write(&self, payload: &serde_json::Value) -> anyhow::Result<PathBuf> {
        let body = serde_json::to_vec_pretty(payload)?;

        for _ in 0..MAX_ATTEMPTS {
            let path = self.next_path();
            let open = tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await;

            match open {
                Ok(file) => {
                    fill(&path, file, &body).await?;
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    warn!("Record {} already exists; trying next name", path.display());
                }
                Err(e) => {
                    return Err(anyhow::anyhow!("failed to create {}: {}", path.display(), e));
                }
            }
        }

        anyhow::bail!(
            "no unused record name in {} after {} attempts",
            self.dir.display(),
            MAX_ATTEMPTS
        )
    }
}

/// Write `body` to the freshly created `path`, removing the file if the
/// write does not complete.
async fn fill(
    path: &Path,
    mut file: impl AsyncWrite + Unpin,
    body: &[u8],
) -> anyhow::Result<()> {
    let written: std::io::Result<()> = async {
        file.write_all(body).await?;
        file.flush().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        if let Err(rm) = tokio::fs::remove_file(path).await {
            warn!("Could not remove partial record {}: {}", path.display(), rm);
        }
        anyhow::bail!("failed to write {}: {}", path.display(), e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[tokio::test]
    async fn writes_pretty_json_that_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordWriter::new(dir.path());
        let payload = json!({"name": "Asha", "farmSize": "2ha"});

        let path = writer.write(&payload).await.unwrap();

        assert!(path.starts_with(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(RECORD_PREFIX));
        assert!(name.ends_with(".json"));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"name\": \"Asha\""));
        let stored: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(stored, payload);
    }

    #[tokio::test]
    async fn rapid_writes_never_share_a_name() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordWriter::new(dir.path());

        let mut paths = HashSet::new();
        for i in 0..50 {
            let path = writer.write(&json!({ "n": i })).await.unwrap();
            assert!(paths.insert(path));
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 50);
    }

    #[tokio::test]
    async fn existing_file_is_skipped_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordWriter::new(dir.path());

        // Occupy the next few names the writer could pick this millisecond
        // or the next; whichever it lands on must be a fresh file.
        let millis = Utc::now().timestamp_millis();
        for m in millis..millis + 3 {
            let taken = dir.path().join(format!("{}{}-0.json", RECORD_PREFIX, m));
            std::fs::write(&taken, "taken").unwrap();
        }

        let path = writer.write(&json!({"name": "Asha"})).await.unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_ne!(text, "taken");
    }

    /// Accepts nothing, like a full disk.
    struct FullDisk;

    impl AsyncWrite for FullDisk {
        fn poll_write(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
            _buf: &[u8],
        ) -> std::task::Poll<std::io::Result<usize>> {
            std::task::Poll::Ready(Err(std::io::Error::new(
                ErrorKind::Other,
                "No space left on device",
            )))
        }

        fn poll_flush(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn poll_shutdown(
            self: std::pin::Pin<&mut Self>,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<std::io::Result<()>> {
            std::task::Poll::Ready(Ok(()))
        }
    }

    #[tokio::test]
    async fn failed_write_leaves_no_partial_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{}1-0.json", RECORD_PREFIX));
        std::fs::write(&path, "{\n  \"na").unwrap();

        let err = fill(&path, FullDisk, b"{}").await.unwrap_err();

        assert!(err.to_string().contains("No space left"));
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn completed_fill_keeps_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{}1-0.json", RECORD_PREFIX));
        let file = tokio::fs::File::create(&path).await.unwrap();

        fill(&path, file, b"{\"name\":\"Asha\"}").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"name":"Asha"}"#);
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RecordWriter::new(dir.path().join("does-not-exist"));
        assert!(writer.write(&json!({})).await.is_err());
    }
}
