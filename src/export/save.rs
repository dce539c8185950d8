//! Delivery of encoded artifacts to the platform save mechanism.

use std::fs;
use std::path::PathBuf;

use super::ExportArtifact;
use crate::Result;

/// Sink that receives the final artifact bytes.
///
/// The session treats saving as fire-and-forget; implementations should
/// be cheap and synchronous.
pub trait FileSaver: Send + Sync {
    fn save(&self, bytes: &[u8], mime_type: &str, filename: &str) -> Result<()>;
}

/// Saves artifacts into a directory on disk, creating it if needed.
pub struct DiskSaver {
    dir: PathBuf,
}

impl DiskSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path an artifact with this filename would be written to.
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl FileSaver for DiskSaver {
    fn save(&self, bytes: &[u8], _mime_type: &str, filename: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.target_path(filename), bytes)?;
        Ok(())
    }
}

/// Hand an artifact to the saver. Failures here are logged and swallowed:
/// the save mechanism's outcome is not observed by the rest of the
/// pipeline.
pub fn deliver(saver: &dyn FileSaver, artifact: &ExportArtifact) {
    if let Err(e) = saver.save(&artifact.bytes, artifact.mime_type, &artifact.filename) {
        log::error!("failed to save {}: {}", artifact.filename, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("certforge-save-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn disk_saver_writes_the_artifact() {
        let dir = scratch_dir("write");
        let saver = DiskSaver::new(&dir);
        saver
            .save(b"payload", "image/jpeg", "certificate_test.jpeg")
            .expect("save");

        let path = dir.join("certificate_test.jpeg");
        assert_eq!(fs::read(&path).unwrap(), b"payload");
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn target_path_joins_directory_and_filename() {
        let saver = DiskSaver::new("/tmp/out");
        assert_eq!(
            saver.target_path("a.pdf"),
            PathBuf::from("/tmp/out").join("a.pdf")
        );
    }
}
