//! Profile icon preview.
//!
//! Selecting an image shows it immediately as a `data:` URL, remembers it in
//! page-local storage and asks the page to submit the upload form. A
//! remembered icon is restored when the profile page loads.

use std::cell::RefCell;
use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Storage key of the remembered icon.
pub const SELECTED_ICON_KEY: &str = "selectedIcon";

/// Page-local key/value storage (`localStorage` on a real page).
pub trait IconStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory [`IconStore`].
#[derive(Debug, Default)]
pub struct MemoryIconStore {
    entries: RefCell<HashMap<String, String>>,
}

impl IconStore for MemoryIconStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// A file picked in the icon input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Encode `bytes` as a `data:` URL, guessing the MIME type from `file_name`.
pub fn icon_data_url(file_name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// What the page must do after a selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconChange {
    /// Preview updated; submit the upload form.
    Submit { preview_src: String },
    /// No file selected; leave everything as is.
    Unchanged,
}

/// Preview state of the profile icon.
#[derive(Debug)]
pub struct IconPreview<S> {
    store: S,
    src: Option<String>,
}

impl<S: IconStore> IconPreview<S> {
    /// Restore a remembered icon, if any.
    pub fn restore(store: S) -> Self {
        let src = store.get(SELECTED_ICON_KEY);
        Self { store, src }
    }

    /// Current preview source, `None` for the server-rendered image.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn select(&mut self, file: Option<SelectedFile>) -> IconChange {
        let Some(file) = file else {
            return IconChange::Unchanged;
        };
        let data_url = icon_data_url(&file.name, &file.bytes);
        self.store.set(SELECTED_ICON_KEY, &data_url);
        self.src = Some(data_url.clone());
        IconChange::Submit {
            preview_src: data_url,
        }
    }
}
