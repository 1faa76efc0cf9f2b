use std::path::{Path, PathBuf};

use anyhow::Context;
use axum::async_trait;
use bytes::Bytes;

/// Narrow interface over the photo blob store.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn put(&self, name: &str, body: Bytes) -> anyhow::Result<()>;
    async fn delete(&self, name: &str) -> anyhow::Result<()>;
    /// Server-local path a stored name resolves to.
    fn local_path(&self, name: &str) -> PathBuf;
}

/// Stores uploaded photos as flat files under a single directory.
#[derive(Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl PhotoStore for DiskStore {
    async fn put(&self, name: &str, body: Bytes) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("create uploads dir {}", self.root.display()))?;
        let path = self.local_path(name);
        tokio::fs::write(&path, &body)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    async fn delete(&self, name: &str) -> anyhow::Result<()> {
        let path = self.local_path(name);
        tokio::fs::remove_file(&path)
            .await
            .with_context(|| format!("remove {}", path.display()))?;
        Ok(())
    }

    fn local_path(&self, name: &str) -> PathBuf {
        // Names are server-generated; strip any path components regardless.
        let base = Path::new(name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        self.root.join(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_store() -> DiskStore {
        let root = std::env::temp_dir().join(format!("catchbook-test-{}", Uuid::new_v4()));
        DiskStore::new(root)
    }

    #[tokio::test]
    async fn put_then_delete_roundtrip() {
        let store = temp_store();
        let name = "photo.jpg";

        store
            .put(name, Bytes::from_static(b"jpeg bytes"))
            .await
            .expect("put should succeed");
        let on_disk = tokio::fs::read(store.local_path(name)).await.expect("read back");
        assert_eq!(on_disk, b"jpeg bytes");

        store.delete(name).await.expect("delete should succeed");
        assert!(!store.local_path(name).exists());
    }

    #[tokio::test]
    async fn delete_of_missing_file_errors() {
        let store = temp_store();
        assert!(store.delete("never-written.png").await.is_err());
    }

    #[tokio::test]
    async fn local_path_ignores_path_components() {
        let store = temp_store();
        assert_eq!(
            store.local_path("../../etc/passwd"),
            store.local_path("passwd")
        );
    }
}
