//! Where command documents are read from.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

/// Read access to command documents.
///
/// The loader only reads files and lists directories through this trait, so
/// tests and embedders can supply documents without touching the disk.
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Read a whole document as UTF-8 text.
    async fn read_text_file(&self, path: &Path) -> std::io::Result<String>;

    /// List the entry names (not full paths) in a directory.
    async fn list_directory(&self, path: &Path) -> std::io::Result<Vec<String>>;
}

/// [`DefinitionSource`] backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

#[async_trait]
impl DefinitionSource for LocalSource {
    async fn read_text_file(&self, path: &Path) -> std::io::Result<String> {
        fs::read_to_string(path).await
    }

    async fn list_directory(&self, path: &Path) -> std::io::Result<Vec<String>> {
        let mut entries = fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
