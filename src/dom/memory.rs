//! In-memory page elements.
//!
//! Used by the command-line binary and by tests. Layout is modelled with
//! fixed line and row heights so measurements are deterministic.

use std::cell::{Cell, RefCell};

use super::{Height, MessageForm, MessageList, Notifier, SubmitControl, TextArea};
use crate::error::DomError;

/// Default line height of the message input, in pixels.
pub const DEFAULT_LINE_HEIGHT: u32 = 20;

/// Form with a fixed set of hidden fields.
#[derive(Debug, Default)]
pub struct MemoryForm {
    fields: RefCell<Vec<(String, String)>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.borrow_mut().push((name.into(), value.into()));
        self
    }
}

impl MessageForm for MemoryForm {
    fn fields(&self) -> Vec<(String, String)> {
        self.fields.borrow().clone()
    }
}

/// Text area whose natural height is `rows * line_height + padding`.
///
/// A logical line longer than `cols` characters soft-wraps onto further rows.
#[derive(Debug)]
pub struct MemoryTextArea {
    value: RefCell<String>,
    height: Cell<Height>,
    line_height: u32,
    padding: u32,
    cols: Option<usize>,
}

impl Default for MemoryTextArea {
    fn default() -> Self {
        Self {
            value: RefCell::new(String::new()),
            height: Cell::new(Height::Auto),
            line_height: DEFAULT_LINE_HEIGHT,
            padding: 0,
            cols: None,
        }
    }
}

impl MemoryTextArea {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_line_height(mut self, line_height: u32) -> Self {
        self.line_height = line_height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols.max(1));
        self
    }

    /// Height the content needs, ignoring any fixed height.
    pub fn natural_height(&self) -> u32 {
        let value = self.value.borrow();
        let rows: usize = value
            .split('\n')
            .map(|line| match self.cols {
                Some(cols) => line.chars().count().div_ceil(cols).max(1),
                None => 1,
            })
            .sum();
        u32::try_from(rows)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.line_height)
            .saturating_add(self.padding)
    }
}

impl TextArea for MemoryTextArea {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn scroll_height(&self) -> u32 {
        let natural = self.natural_height();
        match self.height.get() {
            Height::Auto => natural,
            Height::Pixels(fixed) => natural.max(fixed),
        }
    }

    fn height(&self) -> Height {
        self.height.get()
    }

    fn set_height(&self, height: Height) {
        self.height.set(height);
    }
}

/// Submit button with a swappable caption.
#[derive(Debug)]
pub struct MemoryButton {
    disabled: Cell<bool>,
    label: RefCell<String>,
}

impl MemoryButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            disabled: Cell::new(false),
            label: RefCell::new(label.into()),
        }
    }
}

impl SubmitControl for MemoryButton {
    fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    fn label(&self) -> String {
        self.label.borrow().clone()
    }

    fn set_label(&self, label: &str) {
        *self.label.borrow_mut() = label.to_string();
    }
}

/// Message list with a fixed viewport and one row per appended item.
#[derive(Debug)]
pub struct MemoryMessageList {
    items: RefCell<Vec<String>>,
    row_height: u32,
    client_height: u32,
    scroll_top: Cell<u32>,
}

impl Default for MemoryMessageList {
    fn default() -> Self {
        Self::new(60, 300)
    }
}

impl MemoryMessageList {
    pub fn new(row_height: u32, client_height: u32) -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            row_height,
            client_height,
            scroll_top: Cell::new(0),
        }
    }

    /// Markup of every appended item, oldest first.
    pub fn items(&self) -> Vec<String> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll_top(&self) -> u32 {
        self.scroll_height().saturating_sub(self.client_height)
    }
}

impl MessageList for MemoryMessageList {
    fn append_html(&self, markup: &str) -> Result<(), DomError> {
        self.items.borrow_mut().push(markup.to_string());
        Ok(())
    }

    fn scroll_height(&self) -> u32 {
        let rows = u32::try_from(self.items.borrow().len()).unwrap_or(u32::MAX);
        rows.saturating_mul(self.row_height).max(self.client_height)
    }

    fn scroll_top(&self) -> u32 {
        self.scroll_top.get()
    }

    fn set_scroll_top(&self, top: u32) {
        self.scroll_top.set(top.min(self.max_scroll_top()));
    }
}

/// Records notices instead of showing them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
