//! The chat message composer.
//!
//! [`ChatComposer`] owns the message input, the submit control and the
//! message list of one chat page. It reacts to three events:
//!
//! - `input`: grow the text area to fit its content
//! - `keydown`: Enter with the configured modifier submits
//! - `submit`: send the draft, append the confirmed message, recover on error
//!
//! # Submit lifecycle
//!
//! `Idle → Sending → {Success, Failure} → Idle`. The submit control is
//! disabled exactly while a request is in flight; that is the only guard
//! against overlapping submits. Returning to `Idle` is tied to the lifetime
//! of a guard, so it happens on every path out of the request.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use async_trait::async_trait;
//! use chat_composer::composer::{ChatComposer, ComposerElements, ComposerOptions, SubmitOutcome};
//! use chat_composer::dom::memory::{
//!     MemoryButton, MemoryForm, MemoryMessageList, MemoryTextArea, RecordingNotifier,
//! };
//! use chat_composer::error::Result;
//! use chat_composer::message::{FormPayload, SentMessage};
//! use chat_composer::transport::MessageTransport;
//!
//! struct Echo;
//!
//! #[async_trait(?Send)]
//! impl MessageTransport for Echo {
//!     async fn send(&self, payload: &FormPayload) -> Result<SentMessage> {
//!         Ok(SentMessage::new(payload.get("content").unwrap_or_default(), "12:00"))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let list = Rc::new(MemoryMessageList::default());
//! let elements = ComposerElements {
//!     form: Rc::new(MemoryForm::new().with_field("chatID", "c1")),
//!     input: Rc::new(MemoryTextArea::new("Hello!")),
//!     list: Rc::clone(&list) as _,
//!     submit: Rc::new(MemoryButton::new("Send")),
//!     notifier: Rc::new(RecordingNotifier::new()),
//! };
//! let composer = ChatComposer::mount(elements, Rc::new(Echo), ComposerOptions::default());
//!
//! assert_eq!(composer.on_submit().await, SubmitOutcome::Delivered);
//! assert_eq!(list.len(), 1);
//! # }
//! ```

mod guard;
mod keyboard;
mod render;

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::dom::{Height, MessageForm, MessageList, Notifier, SubmitControl, TextArea};
use crate::error::{ComposerError, FailureKind};
use crate::message::{DraftMessage, FormPayload};
use crate::transport::MessageTransport;

use guard::SendingGuard;
pub use keyboard::{KeyPress, Modifier, SubmitShortcut};
pub use render::sent_message_markup;

/// Captions, shortcut and field names used by the composer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComposerOptions {
    /// Form field the draft text is submitted under.
    pub content_field: String,
    /// Modifier that, held with Enter, submits.
    pub submit_modifier: Modifier,
    /// Caption for a submit control the host creates itself. The composer
    /// never writes it; after a request the control gets back the caption
    /// it had before.
    pub idle_label: String,
    /// Submit caption while a request is in flight.
    pub sending_label: String,
    /// Notice shown for any failed attempt.
    pub failure_notice: String,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self {
            content_field: "content".to_string(),
            submit_modifier: Modifier::Ctrl,
            idle_label: "Send".to_string(),
            sending_label: "Sending".to_string(),
            failure_notice: "Failed to send message".to_string(),
        }
    }
}

/// Page elements the composer operates on.
#[derive(Clone)]
pub struct ComposerElements {
    pub form: Rc<dyn MessageForm>,
    pub input: Rc<dyn TextArea>,
    pub list: Rc<dyn MessageList>,
    pub submit: Rc<dyn SubmitControl>,
    pub notifier: Rc<dyn Notifier>,
}

impl fmt::Debug for ComposerElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposerElements").finish_non_exhaustive()
    }
}

/// Composer state, read off the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Idle,
    Sending,
}

impl ComposerState {
    pub fn of(control: &dyn SubmitControl) -> Self {
        if control.is_disabled() {
            Self::Sending
        } else {
            Self::Idle
        }
    }
}

/// How one submit attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The draft was blank; nothing was sent.
    Skipped,
    /// A request was already in flight; nothing was sent.
    Blocked,
    /// The message was confirmed and appended to the list.
    Delivered,
    /// The attempt failed; the draft is kept and the user was notified.
    Failed(ComposerError),
}

impl SubmitOutcome {
    /// Failure classification, if the attempt failed.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Failed(err) => Some(err.kind()),
            _ => None,
        }
    }
}

impl PartialEq for SubmitOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Failed(a), Self::Failed(b)) => a.kind() == b.kind(),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

/// Result of a key press.
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    /// Not the shortcut; the default action proceeds.
    PassThrough,
    /// The shortcut: default action prevented, submit ran.
    Submitted(SubmitOutcome),
}

impl KeyOutcome {
    pub fn default_prevented(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Chat message composer for one page.
pub struct ChatComposer {
    elements: ComposerElements,
    transport: Rc<dyn MessageTransport>,
    shortcut: SubmitShortcut,
    options: ComposerOptions,
}

impl fmt::Debug for ChatComposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatComposer")
            .field("shortcut", &self.shortcut)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ChatComposer {
    /// Attach to the page and fit the input to any pre-filled content.
    pub fn mount(
        elements: ComposerElements,
        transport: Rc<dyn MessageTransport>,
        options: ComposerOptions,
    ) -> Self {
        let composer = Self {
            elements,
            transport,
            shortcut: SubmitShortcut::new(options.submit_modifier),
            options,
        };
        composer.on_input();
        composer
    }

    pub fn state(&self) -> ComposerState {
        ComposerState::of(self.elements.submit.as_ref())
    }

    pub fn options(&self) -> &ComposerOptions {
        &self.options
    }

    /// Resize the input to exactly fit its content.
    pub fn on_input(&self) {
        let input = self.elements.input.as_ref();
        input.set_height(Height::Auto);
        let fitted = input.scroll_height();
        input.set_height(Height::Pixels(fitted));
    }

    /// Submit on the shortcut; let every other key through.
    pub async fn on_key_down(&self, key: &KeyPress) -> KeyOutcome {
        if !self.shortcut.matches(key) {
            return KeyOutcome::PassThrough;
        }
        KeyOutcome::Submitted(self.on_submit().await)
    }

    /// Send the current draft.
    pub async fn on_submit(&self) -> SubmitOutcome {
        let draft = DraftMessage::new(self.elements.input.value());
        if draft.is_blank() {
            debug!(name: "composer.submit.skipped", "Blank draft, nothing to send");
            return SubmitOutcome::Skipped;
        }

        let Some(_sending) =
            SendingGuard::acquire(self.elements.submit.as_ref(), &self.options.sending_label)
        else {
            debug!(name: "composer.submit.blocked", "Request already in flight");
            return SubmitOutcome::Blocked;
        };

        let attempt = Uuid::new_v4();
        let payload = self.payload(&draft);
        debug!(
            name: "composer.submit.sending",
            attempt = %attempt,
            fields = payload.fields().len(),
            "Submitting message"
        );

        match self.deliver(&payload).await {
            Ok(()) => {
                info!(name: "composer.submit.sent", attempt = %attempt, "Message delivered");
                SubmitOutcome::Delivered
            }
            Err(err) => {
                warn!(
                    name: "composer.submit.failed",
                    attempt = %attempt,
                    kind = err.kind().as_str(),
                    error = %err,
                    "Message delivery failed"
                );
                self.elements.notifier.alert(&self.options.failure_notice);
                SubmitOutcome::Failed(err)
            }
        }
    }

    fn payload(&self, draft: &DraftMessage) -> FormPayload {
        let mut payload: FormPayload = self.elements.form.fields().into_iter().collect();
        payload.push(self.options.content_field.as_str(), draft.text());
        payload
    }

    async fn deliver(&self, payload: &FormPayload) -> Result<(), ComposerError> {
        let message = self.transport.send(payload).await?;

        let list = self.elements.list.as_ref();
        list.append_html(&sent_message_markup(&message))?;
        list.set_scroll_top(list.scroll_height());

        self.elements.input.set_value("");
        self.on_input();
        Ok(())
    }
}
