//! Page element interfaces.
//!
//! The composer never looks elements up by identifier. A page binding (or a
//! test) hands it implementations of these traits once, at mount time.
//!
//! Methods take `&self`: elements are shared handles into a single-threaded
//! page, so implementations use interior mutability.
//!
//! - [`MessageForm`]: fields submitted alongside the draft
//! - [`TextArea`]: the message input
//! - [`SubmitControl`]: the send button and its caption
//! - [`MessageList`]: the conversation container
//! - [`Notifier`]: blocking user-visible notices
//! - [`memory`]: in-memory implementations for headless use

pub mod memory;

use crate::error::DomError;

/// Rendered height of a text area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Height {
    /// Let layout decide; used before measuring.
    #[default]
    Auto,
    /// Fixed height in CSS pixels.
    Pixels(u32),
}

/// The form that owns the composer's controls.
pub trait MessageForm {
    /// Fields other than the draft text (hidden inputs such as the chat ID).
    fn fields(&self) -> Vec<(String, String)>;
}

/// The multi-line message input.
pub trait TextArea {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    /// Height the content needs at the current width, never less than the
    /// current fixed height.
    fn scroll_height(&self) -> u32;
    fn height(&self) -> Height;
    fn set_height(&self, height: Height);
}

/// The submit button.
pub trait SubmitControl {
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
}

/// The container messages are appended to.
pub trait MessageList {
    /// Append one list item built from `markup`.
    fn append_html(&self, markup: &str) -> Result<(), DomError>;
    fn scroll_height(&self) -> u32;
    fn scroll_top(&self) -> u32;
    fn set_scroll_top(&self, top: u32);
}

/// Blocking notice shown to the user (`alert` on a real page).
pub trait Notifier {
    fn alert(&self, message: &str);
}
