//! File-drop capture.
//!
//! A [`DropZone`] tracks the transient drag state of the drop surface and
//! turns drop or browse-select events into a committed file list.
//!
//! ```text
//!            DragEnter/DragOver(accept)
//!   ┌──────┐ ─────────────────────────▶ ┌────────────────┐
//!   │ Idle │                            │ DragOverAccept │
//!   └──────┘ ◀───────────────────────── └────────────────┘
//!      ▲  ▲     DragLeave (outermost)          │ ▲
//!      │  │     Drop / BrowseSelect            ▼ │ verdict changes
//!      │  │                             ┌────────────────┐
//!      │  └──────────────────────────── │ DragOverReject │
//!      │                                └────────────────┘
//!      └── Drop / BrowseSelect commits the accepted files
//! ```
//!
//! Drag states are presentational only. The committed value changes on
//! `Drop` and `BrowseSelect`, and a commit replaces the previous list
//! instead of appending to it.

use crate::error::RejectReason;
use crate::models::FileHandle;

// =============================================================================
// Accept Policy
// =============================================================================

/// A file as seen during a drag, before the drop reveals names and sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    /// MIME type, empty when the browser does not expose it.
    pub mime_type: String,
}

impl DragItem {
    pub fn new(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
        }
    }
}

/// Drag type announced by the browser when the payload contains files.
pub const FILES_DRAG_TYPE: &str = "Files";

/// Whether a drag with these `dataTransfer.types` carries files.
///
/// Text, links and in-page elements never do; the drop surface ignores
/// them entirely.
pub fn carries_files<S: AsRef<str>>(types: &[S]) -> bool {
    types.iter().any(|t| t.as_ref() == FILES_DRAG_TYPE)
}

/// Whether the content being dragged would be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragVerdict {
    Accept,
    Reject,
}

/// File-type and arity policy of a drop zone.
///
/// Patterns follow the HTML `accept` attribute: `image/*`, `image/png`,
/// or `.png`. An empty pattern list accepts every type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptPolicy {
    accept: Vec<String>,
    multiple: bool,
    max_size: Option<u64>,
}

impl Default for AcceptPolicy {
    fn default() -> Self {
        Self {
            accept: Vec::new(),
            multiple: true,
            max_size: None,
        }
    }
}

impl AcceptPolicy {
    /// Accept any image type.
    pub fn images() -> Self {
        Self::default().with_accept("image/*")
    }

    /// Add an accepted pattern.
    pub fn with_accept(mut self, pattern: impl Into<String>) -> Self {
        self.accept.push(pattern.into().trim().to_ascii_lowercase());
        self
    }

    /// Allow more than one file per drop.
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Refuse files larger than `bytes`.
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Value for the `accept` attribute of the browse input.
    pub fn accept_attr(&self) -> String {
        self.accept.join(",")
    }

    fn mime_patterns(&self) -> impl Iterator<Item = &str> {
        self.accept.iter().map(String::as_str).filter(|p| !p.starts_with('.'))
    }

    fn matches_mime(&self, mime: &str) -> bool {
        let mime = mime.to_ascii_lowercase();
        self.mime_patterns().any(|pattern| match pattern.strip_suffix("/*") {
            Some(major) => mime.split('/').next() == Some(major),
            None => pattern == mime,
        })
    }

    fn matches_extension(&self, ext: &str) -> bool {
        self.accept
            .iter()
            .filter_map(|p| p.strip_prefix('.'))
            .any(|p| p == ext)
    }

    /// Check one file against the type and size rules.
    pub fn check(&self, file: &FileHandle) -> Result<(), RejectReason> {
        if !self.accept.is_empty() {
            let by_type = !file.mime_type.is_empty() && self.matches_mime(&file.mime_type);
            let by_ext = file.extension().is_some_and(|ext| self.matches_extension(&ext));
            if !by_type && !by_ext {
                let shown = if file.mime_type.is_empty() {
                    file.name.clone()
                } else {
                    file.mime_type.clone()
                };
                return Err(RejectReason::UnsupportedType(shown));
            }
        }
        if let Some(max) = self.max_size {
            if file.size > max {
                return Err(RejectReason::TooLarge { size: file.size, max });
            }
        }
        Ok(())
    }

    /// Verdict for content hovering the drop surface.
    ///
    /// Only MIME types are known while dragging. Items without a type, and
    /// policies made only of extensions, cannot be judged yet and pass.
    pub fn drag_verdict(&self, items: &[DragItem]) -> DragVerdict {
        if !self.multiple && items.len() > 1 {
            return DragVerdict::Reject;
        }
        if self.mime_patterns().next().is_none() {
            return DragVerdict::Accept;
        }
        let all_ok = items
            .iter()
            .all(|item| item.mime_type.is_empty() || self.matches_mime(&item.mime_type));
        if all_ok {
            DragVerdict::Accept
        } else {
            DragVerdict::Reject
        }
    }

    /// Split offered files into accepted ones and rejections.
    pub fn partition(&self, files: Vec<FileHandle>) -> DropOutcome {
        if !self.multiple && files.len() > 1 {
            let rejected = files
                .into_iter()
                .map(|file| Rejection {
                    file,
                    reason: RejectReason::TooManyFiles,
                })
                .collect();
            return DropOutcome {
                accepted: Vec::new(),
                rejected,
            };
        }

        let mut outcome = DropOutcome::default();
        for file in files {
            match self.check(&file) {
                Ok(()) => outcome.accepted.push(file),
                Err(reason) => outcome.rejected.push(Rejection { file, reason }),
            }
        }
        outcome
    }
}

// =============================================================================
// Drop Zone State Machine
// =============================================================================

/// Visual state of the drop surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    DragOverAccept,
    DragOverReject,
}

impl From<DragVerdict> for DragState {
    fn from(verdict: DragVerdict) -> Self {
        match verdict {
            DragVerdict::Accept => DragState::DragOverAccept,
            DragVerdict::Reject => DragState::DragOverReject,
        }
    }
}

/// Event delivered to the drop surface.
#[derive(Debug, Clone, PartialEq)]
pub enum DropEvent {
    DragEnter(DragVerdict),
    DragOver(DragVerdict),
    DragLeave,
    Drop(Vec<FileHandle>),
    BrowseSelect(Vec<FileHandle>),
}

/// A refused file with its reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub file: FileHandle,
    pub reason: RejectReason,
}

/// Result of a drop or browse selection.
///
/// `accepted` is the new field value, even when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropOutcome {
    pub accepted: Vec<FileHandle>,
    pub rejected: Vec<Rejection>,
}

/// Drop surface state machine.
#[derive(Debug, Clone, Default)]
pub struct DropZone {
    policy: AcceptPolicy,
    state: DragState,
    // Nested children fire their own enter/leave pairs.
    depth: u32,
}

impl DropZone {
    pub fn new(policy: AcceptPolicy) -> Self {
        Self {
            policy,
            state: DragState::Idle,
            depth: 0,
        }
    }

    pub fn policy(&self) -> &AcceptPolicy {
        &self.policy
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Verdict for a drag, or `None` when it carries no files and must be
    /// left alone.
    pub fn verdict_for<S: AsRef<str>>(&self, types: &[S], items: &[DragItem]) -> Option<DragVerdict> {
        if !carries_files(types) {
            return None;
        }
        Some(self.policy.drag_verdict(items))
    }

    /// Apply an event. Returns the outcome to commit on drop or selection.
    pub fn handle(&mut self, event: DropEvent) -> Option<DropOutcome> {
        match event {
            DropEvent::DragEnter(verdict) => {
                self.depth += 1;
                self.state = DragState::from(verdict);
                None
            }
            DropEvent::DragOver(verdict) => {
                self.depth = self.depth.max(1);
                self.state = DragState::from(verdict);
                None
            }
            DropEvent::DragLeave => {
                self.depth = self.depth.saturating_sub(1);
                if self.depth == 0 {
                    self.state = DragState::Idle;
                }
                None
            }
            DropEvent::Drop(files) | DropEvent::BrowseSelect(files) => {
                self.reset();
                let outcome = self.policy.partition(files);
                log::debug!(
                    "Drop committed: {} accepted, {} rejected",
                    outcome.accepted.len(),
                    outcome.rejected.len()
                );
                Some(outcome)
            }
        }
    }

    /// Return to `Idle`, e.g. when the drag is cancelled outside the surface.
    pub fn reset(&mut self) {
        self.depth = 0;
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::form::FormState;

    fn png(name: &str) -> FileHandle {
        FileHandle::new(name, "image/png", 100)
    }

    fn names(files: &[FileHandle]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_drop_replaces_previous_list() {
        let mut zone = DropZone::new(AcceptPolicy::images());
        let mut committed: Vec<FileHandle> = Vec::new();

        if let Some(outcome) = zone.handle(DropEvent::Drop(vec![png("a.png"), png("b.png")])) {
            committed = outcome.accepted;
        }
        assert_eq!(names(&committed), ["a.png", "b.png"]);

        if let Some(outcome) = zone.handle(DropEvent::Drop(vec![png("c.png")])) {
            committed = outcome.accepted;
        }
        assert_eq!(names(&committed), ["c.png"]);
    }

    #[test]
    fn test_reject_hover_does_not_commit() {
        let policy = AcceptPolicy::images();
        let mut zone = DropZone::new(policy.clone());
        let mut form = FormState::new(FormConfig::default());
        form.commit_files(vec![png("kept.png")]);

        let verdict = zone
            .verdict_for(&["Files"], &[DragItem::new("application/pdf")])
            .unwrap();
        assert_eq!(verdict, DragVerdict::Reject);

        assert!(zone.handle(DropEvent::DragEnter(verdict)).is_none());
        assert_eq!(zone.state(), DragState::DragOverReject);
        assert_eq!(names(&form.values().picture), ["kept.png"]);

        assert!(zone.handle(DropEvent::DragLeave).is_none());
        assert_eq!(zone.state(), DragState::Idle);
        assert_eq!(names(&form.values().picture), ["kept.png"]);
    }

    #[test]
    fn test_text_drag_is_ignored() {
        let mut zone = DropZone::new(AcceptPolicy::images());
        let mut form = FormState::new(FormConfig::default());
        form.commit_files(vec![png("a.png")]);

        // Dragging a link or selected text: no "Files" type, no file items.
        let types = ["text/plain", "text/uri-list"];
        assert_eq!(zone.verdict_for(&types, &[]), None);
        assert_eq!(zone.state(), DragState::Idle);

        // The surface only delivers a drop for drags that carry files.
        if carries_files(&types) {
            if let Some(outcome) = zone.handle(DropEvent::Drop(Vec::new())) {
                form.commit_files(outcome.accepted);
            }
        }
        assert_eq!(zone.state(), DragState::Idle);
        assert_eq!(names(&form.values().picture), ["a.png"]);
    }

    #[test]
    fn test_file_drag_detection() {
        assert!(carries_files(&["text/plain", "Files"]));
        assert!(!carries_files(&["text/html"]));
        assert!(!carries_files::<&str>(&[]));

        let zone = DropZone::new(AcceptPolicy::images());
        assert_eq!(
            zone.verdict_for(&["Files"], &[DragItem::new("image/png")]),
            Some(DragVerdict::Accept)
        );
    }

    #[test]
    fn test_nested_leave_keeps_active() {
        let mut zone = DropZone::new(AcceptPolicy::default());
        zone.handle(DropEvent::DragEnter(DragVerdict::Accept));
        zone.handle(DropEvent::DragEnter(DragVerdict::Accept));
        zone.handle(DropEvent::DragLeave);
        assert_eq!(zone.state(), DragState::DragOverAccept);
        zone.handle(DropEvent::DragLeave);
        assert_eq!(zone.state(), DragState::Idle);
    }

    #[test]
    fn test_drop_returns_to_idle() {
        let mut zone = DropZone::new(AcceptPolicy::default());
        zone.handle(DropEvent::DragEnter(DragVerdict::Accept));
        zone.handle(DropEvent::DragOver(DragVerdict::Accept));
        let outcome = zone.handle(DropEvent::Drop(vec![png("a.png")]));
        assert!(outcome.is_some());
        assert_eq!(zone.state(), DragState::Idle);

        // A stray leave after the drop must not underflow.
        zone.handle(DropEvent::DragLeave);
        assert_eq!(zone.state(), DragState::Idle);
    }

    #[test]
    fn test_all_rejected_commits_empty_list() {
        let mut zone = DropZone::new(AcceptPolicy::images());
        let outcome = zone
            .handle(DropEvent::BrowseSelect(vec![FileHandle::new("doc.pdf", "application/pdf", 5)]))
            .unwrap();
        assert!(outcome.accepted.is_empty());
        assert_eq!(
            outcome.rejected[0].reason,
            RejectReason::UnsupportedType("application/pdf".into())
        );
    }

    #[test]
    fn test_single_file_policy() {
        let policy = AcceptPolicy::images().multiple(false);
        assert_eq!(
            policy.drag_verdict(&[DragItem::new("image/png"), DragItem::new("image/png")]),
            DragVerdict::Reject
        );

        let outcome = policy.partition(vec![png("a.png"), png("b.png")]);
        assert!(outcome.accepted.is_empty());
        assert!(outcome.rejected.iter().all(|r| r.reason == RejectReason::TooManyFiles));

        let outcome = policy.partition(vec![png("a.png")]);
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn test_extension_and_size_rules() {
        let policy = AcceptPolicy::default().with_accept(".PNG").max_size(1000);
        assert!(policy.check(&FileHandle::new("shot.png", "", 10)).is_ok());
        assert!(policy.check(&FileHandle::new("shot.jpg", "image/jpeg", 10)).is_err());
        assert_eq!(
            policy.check(&FileHandle::new("big.png", "image/png", 2000)),
            Err(RejectReason::TooLarge { size: 2000, max: 1000 })
        );
        // Extension-only policies cannot judge a drag.
        assert_eq!(policy.drag_verdict(&[DragItem::new("image/jpeg")]), DragVerdict::Accept);
    }

    #[test]
    fn test_untyped_drag_items_pass() {
        let policy = AcceptPolicy::images();
        assert_eq!(policy.drag_verdict(&[DragItem::new("")]), DragVerdict::Accept);
        assert_eq!(policy.drag_verdict(&[]), DragVerdict::Accept);
    }

    #[test]
    fn test_accept_attr() {
        let policy = AcceptPolicy::images().with_accept(".svg");
        assert_eq!(policy.accept_attr(), "image/*,.svg");
    }
}
