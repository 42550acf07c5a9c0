//! Preview URLs for the selected files.
//!
//! Browsers hand out object URLs that stay alive until explicitly revoked.
//! [`PreviewSet`] acquires one per file when it enters the displayed list
//! and releases it when the file leaves the list or the set is dropped, so
//! every acquisition is paired with exactly one release no matter how many
//! drops happen.

use std::collections::{HashMap, HashSet};

use crate::error::PreviewResult;
use crate::models::{FileHandle, FileId};

/// Factory for displayable URLs.
pub trait ObjectUrls {
    /// Byte source a URL is derived from.
    type Blob: ?Sized;

    /// Create a URL for `blob`.
    fn create(&self, file: &FileHandle, blob: &Self::Blob) -> PreviewResult<String>;

    /// Release a URL returned by [`ObjectUrls::create`].
    fn revoke(&self, url: &str);
}

/// A rendered preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub file_id: FileId,
    /// Rendering key.
    pub name: String,
    pub url: String,
}

impl Thumbnail {
    /// Key for keyed list rendering.
    ///
    /// Carries the file identity next to the name, so re-selecting a file
    /// with the same name renders a fresh image instead of reusing one
    /// whose URL was revoked.
    pub fn render_key(&self) -> (String, FileId) {
        (self.name.clone(), self.file_id)
    }
}

/// Live preview URLs keyed by file identity.
pub struct PreviewSet<U: ObjectUrls> {
    urls: U,
    live: HashMap<FileId, Thumbnail>,
}

impl<U: ObjectUrls> PreviewSet<U> {
    pub fn new(urls: U) -> Self {
        Self {
            urls,
            live: HashMap::new(),
        }
    }

    /// Number of URLs currently held.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Bring the live set in line with the committed file list.
    ///
    /// Files already previewed keep their URL, new ones get a URL, and the
    /// URLs of files no longer listed are revoked. Returns the thumbnails in
    /// list order; a file whose URL cannot be created is left out.
    pub fn sync<'a, I>(&mut self, entries: I) -> Vec<Thumbnail>
    where
        I: IntoIterator<Item = (&'a FileHandle, &'a U::Blob)>,
        U::Blob: 'a,
    {
        let mut seen = HashSet::new();
        let mut thumbnails = Vec::new();

        for (file, blob) in entries {
            seen.insert(file.id());
            if let Some(existing) = self.live.get(&file.id()) {
                thumbnails.push(existing.clone());
                continue;
            }
            match self.urls.create(file, blob) {
                Ok(url) => {
                    let thumb = Thumbnail {
                        file_id: file.id(),
                        name: file.name.clone(),
                        url,
                    };
                    self.live.insert(file.id(), thumb.clone());
                    thumbnails.push(thumb);
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        let stale: Vec<FileId> = self
            .live
            .keys()
            .filter(|id| !seen.contains(id))
            .copied()
            .collect();
        for id in stale {
            if let Some(thumb) = self.live.remove(&id) {
                self.urls.revoke(&thumb.url);
            }
        }

        log::debug!("Previews synced: {} live", self.live.len());
        thumbnails
    }

    /// Release every URL.
    pub fn clear(&mut self) {
        for (_, thumb) in self.live.drain() {
            self.urls.revoke(&thumb.url);
        }
    }
}

impl<U: ObjectUrls> Drop for PreviewSet<U> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreviewError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Ledger {
        created: Vec<String>,
        revoked: Vec<String>,
        counter: usize,
    }

    #[derive(Clone, Default)]
    struct FakeUrls(Rc<RefCell<Ledger>>);

    impl ObjectUrls for FakeUrls {
        type Blob = str;

        fn create(&self, file: &FileHandle, blob: &str) -> PreviewResult<String> {
            if blob.is_empty() {
                return Err(PreviewError::CreateFailed {
                    name: file.name.clone(),
                    message: "empty blob".into(),
                });
            }
            let mut ledger = self.0.borrow_mut();
            ledger.counter += 1;
            let url = format!("blob:test/{}", ledger.counter);
            ledger.created.push(url.clone());
            Ok(url)
        }

        fn revoke(&self, url: &str) {
            self.0.borrow_mut().revoked.push(url.to_string());
        }
    }

    fn png(name: &str) -> FileHandle {
        FileHandle::new(name, "image/png", 3)
    }

    #[test]
    fn test_replacing_list_releases_old_urls() {
        let urls = FakeUrls::default();
        let mut set = PreviewSet::new(urls.clone());

        let (a, b, c) = (png("a.png"), png("b.png"), png("c.png"));
        let thumbs = set.sync([(&a, "aaa"), (&b, "bbb")]);
        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs[0].name, "a.png");

        let thumbs = set.sync([(&c, "ccc")]);
        assert_eq!(thumbs.len(), 1);
        assert_eq!(set.len(), 1);

        let ledger = urls.0.borrow();
        assert_eq!(ledger.created.len(), 3);
        assert_eq!(ledger.revoked.len(), 2);
        assert!(ledger.revoked.contains(&"blob:test/1".to_string()));
        assert!(ledger.revoked.contains(&"blob:test/2".to_string()));
    }

    #[test]
    fn test_kept_files_reuse_url() {
        let urls = FakeUrls::default();
        let mut set = PreviewSet::new(urls.clone());
        let a = png("a.png");

        let first = set.sync([(&a, "aaa")]);
        let second = set.sync([(&a, "aaa")]);
        assert_eq!(first, second);
        assert_eq!(urls.0.borrow().created.len(), 1);
        assert!(urls.0.borrow().revoked.is_empty());
    }

    #[test]
    fn test_same_name_distinct_files() {
        let urls = FakeUrls::default();
        let mut set = PreviewSet::new(urls.clone());
        let (a1, a2) = (png("a.png"), png("a.png"));

        let thumbs = set.sync([(&a1, "one"), (&a2, "two")]);
        assert_eq!(thumbs.len(), 2);
        assert_ne!(thumbs[0].url, thumbs[1].url);
    }

    #[test]
    fn test_reselected_name_gets_new_key() {
        let urls = FakeUrls::default();
        let mut set = PreviewSet::new(urls.clone());
        let (first, again) = (png("photo.png"), png("photo.png"));

        let before = set.sync([(&first, "one")]);
        let after = set.sync([(&again, "two")]);
        assert_ne!(before[0].render_key(), after[0].render_key());
        assert_eq!(before[0].render_key().0, after[0].render_key().0);
        assert_eq!(urls.0.borrow().revoked, [before[0].url.clone()]);
    }

    #[test]
    fn test_every_url_released_exactly_once() {
        let urls = FakeUrls::default();
        {
            let mut set = PreviewSet::new(urls.clone());
            for round in 0..5 {
                let files = [png(&format!("{}-1.png", round)), png(&format!("{}-2.png", round))];
                set.sync(files.iter().map(|f| (f, "bytes")));
            }
            set.sync(Vec::<(&FileHandle, &str)>::new());
            assert!(set.is_empty());
        }
        let ledger = urls.0.borrow();
        assert_eq!(ledger.created.len(), 10);
        let mut revoked = ledger.revoked.clone();
        revoked.sort();
        revoked.dedup();
        assert_eq!(revoked.len(), 10);
        assert_eq!(ledger.revoked.len(), 10);
    }

    #[test]
    fn test_drop_releases_live_urls() {
        let urls = FakeUrls::default();
        let a = png("a.png");
        {
            let mut set = PreviewSet::new(urls.clone());
            set.sync([(&a, "aaa")]);
        }
        assert_eq!(urls.0.borrow().revoked, ["blob:test/1"]);
    }

    #[test]
    fn test_failed_creation_is_skipped() {
        let urls = FakeUrls::default();
        let mut set = PreviewSet::new(urls.clone());
        let (a, b) = (png("a.png"), png("b.png"));

        let thumbs = set.sync([(&a, ""), (&b, "bbb")]);
        assert_eq!(thumbs.len(), 1);
        assert_eq!(thumbs[0].name, "b.png");
        assert_eq!(set.len(), 1);
    }
}
