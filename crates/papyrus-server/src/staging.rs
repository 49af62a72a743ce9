use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Per-request staging area for uploaded files. The directory and everything
/// staged into it are removed when this drops, on every exit path.
pub struct Staging {
    dir: TempDir,
    count: usize,
}

impl Staging {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            dir: TempDir::with_prefix("papyrus-upload-")?,
            count: 0,
        })
    }

    /// Write one upload under its original filename, stripped to its final
    /// path component. Each file gets its own numbered subdirectory so
    /// duplicate names within a batch cannot collide.
    pub async fn stage(&mut self, filename: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let safe_name = Path::new(filename)
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "upload".into());

        let slot = self.dir.path().join(self.count.to_string());
        self.count += 1;
        tokio::fs::create_dir_all(&slot).await?;

        let path = slot.join(safe_name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_names_get_distinct_paths() {
        let mut staging = Staging::new().unwrap();
        let first = staging.stage("notes.txt", b"one").await.unwrap();
        let second = staging.stage("notes.txt", b"two").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(tokio::fs::read(&first).await.unwrap(), b"one");
        assert_eq!(tokio::fs::read(&second).await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn traversal_components_are_stripped() {
        let mut staging = Staging::new().unwrap();
        let path = staging.stage("../../etc/passwd.txt", b"x").await.unwrap();
        assert!(path.starts_with(staging.dir.path()));
        assert_eq!(path.file_name().unwrap(), "passwd.txt");
    }

    #[tokio::test]
    async fn staged_files_are_removed_on_drop() {
        let path = {
            let mut staging = Staging::new().unwrap();
            staging.stage("gone.txt", b"bye").await.unwrap()
        };
        assert!(!path.exists());
    }
}
