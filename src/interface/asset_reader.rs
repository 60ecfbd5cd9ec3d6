/// A trait for best-effort reads of local assets.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AssetReader: Sync + Send {
    /// Reads the asset with the given name, or `None` when it cannot be read.
    ///
    /// Callers supply their own default; a missing asset is never an error.
    async fn try_read(&self, name: &str) -> Option<Vec<u8>>;

    /// Tells whether the asset with the given name is present, without reading it.
    async fn exists(&self, name: &str) -> bool;
}
