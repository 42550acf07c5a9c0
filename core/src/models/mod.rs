//! Domain models for the submission form.
//!
//! - [`Field`] - The five named slots of the form
//! - [`FormValues`] - Current value of every field
//! - [`FieldValue`] - A single value passed through the update entry point
//! - [`FileHandle`] - Opaque reference to a user-selected file
//! - [`FieldErrors`] - Per-field validation messages

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// Fields
// =============================================================================

/// A named slot of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Description,
    Url,
    About,
    Picture,
}

impl Field {
    /// All fields, in rendering order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Description,
        Field::Url,
        Field::About,
        Field::Picture,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Url => "url",
            Field::About => "about",
            Field::Picture => "picture",
        }
    }

    /// Kind of value the field holds.
    pub fn kind(&self) -> ValueKind {
        match self {
            Field::Picture => ValueKind::Files,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Files,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Text => f.write_str("text"),
            ValueKind::Files => f.write_str("files"),
        }
    }
}

// =============================================================================
// Files
// =============================================================================

static NEXT_FILE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a selected file, unique for the lifetime of the process.
///
/// File names are not unique across selections, so previews and byte
/// storage are keyed by this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(u64);

impl FileId {
    fn next() -> Self {
        FileId(NEXT_FILE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// Opaque reference to a user-selected file.
///
/// Only metadata lives here; the byte stream stays with the UI layer,
/// keyed by [`FileHandle::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHandle {
    #[serde(skip)]
    id: FileId,
    /// File name, used as rendering key.
    pub name: String,
    /// MIME type reported by the browser (may be empty).
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl FileHandle {
    /// Register a new file and give it a fresh identity.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            id: FileId::next(),
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    /// Lowercased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

// =============================================================================
// Values
// =============================================================================

/// Value written through the form-state update entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Files(Vec<FileHandle>),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Files(_) => ValueKind::Files,
        }
    }
}

/// Current value of every field.
///
/// Text fields use the empty string for "absent"; `picture` is always a
/// list, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub description: String,
    pub url: String,
    pub about: String,
    pub picture: Vec<FileHandle>,
}

impl FormValues {
    /// Text value of a field. Returns `None` for `picture`.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Description => Some(&self.description),
            Field::Url => Some(&self.url),
            Field::About => Some(&self.about),
            Field::Picture => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Description => Some(&mut self.description),
            Field::Url => Some(&mut self.url),
            Field::About => Some(&mut self.about),
            Field::Picture => None,
        }
    }

    /// Write a value into a field.
    ///
    /// Returns the expected kind when `value` does not match the field.
    pub(crate) fn set(&mut self, field: Field, value: FieldValue) -> Result<(), ValueKind> {
        match (field, value) {
            (Field::Picture, FieldValue::Files(files)) => {
                self.picture = files;
                Ok(())
            }
            (field, FieldValue::Text(text)) => match self.text_mut(field) {
                Some(slot) => {
                    *slot = text;
                    Ok(())
                }
                None => Err(ValueKind::Files),
            },
            (_, FieldValue::Files(_)) => Err(ValueKind::Text),
        }
    }

    /// JSON rendering handed to submit handlers.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Validation messages keyed by field.
///
/// A field has an entry if and only if it currently fails its rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
