//! Conversion of browser file objects into core file handles.

use syncform::{DragItem, FileHandle};
use web_sys::{DragEvent, File, FileList};

/// Wrap every file of a `FileList`, keeping the browser `File` next to
/// its handle for later preview.
pub fn files_from_list(list: &FileList) -> Vec<(FileHandle, File)> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            let handle = FileHandle::new(file.name(), file.type_(), file.size() as u64);
            (handle, file)
        })
        .collect()
}

/// Files carried by a drop event.
pub fn dropped_files(ev: &DragEvent) -> Vec<(FileHandle, File)> {
    ev.data_transfer()
        .and_then(|dt| dt.files())
        .map(|list| files_from_list(&list))
        .unwrap_or_default()
}

/// `dataTransfer.types` of a drag event.
pub fn drag_types(ev: &DragEvent) -> Vec<String> {
    ev.data_transfer()
        .map(|dt| dt.types().iter().filter_map(|t| t.as_string()).collect())
        .unwrap_or_default()
}

/// File items visible while dragging.
///
/// Only the MIME type is exposed before the drop; non-file items (text,
/// links) are skipped.
pub fn drag_items(ev: &DragEvent) -> Vec<DragItem> {
    let Some(items) = ev.data_transfer().map(|dt| dt.items()) else {
        return Vec::new();
    };
    (0..items.length())
        .filter_map(|i| items.get(i))
        .filter(|item| item.kind() == "file")
        .map(|item| DragItem::new(item.type_()))
        .collect()
}
