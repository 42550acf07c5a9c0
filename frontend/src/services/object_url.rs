//! Browser object URLs for picture previews.

use syncform::{FileHandle, ObjectUrls, PreviewError, PreviewResult};
use web_sys::{File, Url};

/// `URL.createObjectURL` / `URL.revokeObjectURL` backed URL factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    type Blob = File;

    fn create(&self, file: &FileHandle, blob: &File) -> PreviewResult<String> {
        Url::create_object_url_with_blob(blob).map_err(|e| PreviewError::CreateFailed {
            name: file.name.clone(),
            message: format!("{:?}", e),
        })
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}
