use std::path::{Path, PathBuf};

use log::debug;

use crate::AssetReader;

/// The file name of the profile picture in the assets directory.
pub const PROFILE_IMAGE_ASSET: &str = "profile.png";

/// The file name of the resume in the assets directory.
pub const RESUME_ASSET: &str = "resume.pdf";

/// Reads assets from a local directory.
pub struct FileSystemAssetReader {
    root: PathBuf,
}

impl FileSystemAssetReader {
    /// Creates a new `FileSystemAssetReader` rooted at the given directory.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl AssetReader for FileSystemAssetReader {
    async fn try_read(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(content) => Some(content),
            Err(e) => {
                debug!("Asset {} is not readable: {e}", path.display());
                None
            }
        }
    }

    async fn exists(&self, name: &str) -> bool {
        let path = self.root.join(name);
        match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata.is_file(),
            Err(e) => {
                debug!("Asset {} is not present: {e}", path.display());
                false
            }
        }
    }
}
