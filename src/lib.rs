//! Chat Composer
//!
//! Client-side behavior of a server-rendered chat page: composing a message,
//! posting it to the chat endpoint and appending the confirmed message to the
//! conversation without a page reload.
//!
//! # Architecture
//!
//! - **Composer**: event handlers for input, keyboard shortcut and submit
//! - **Elements**: page elements injected as trait objects, never looked up
//! - **Transport**: one HTTP POST per submit, single-threaded and awaited once
//! - **Page behaviors**: settings panels, card click-through, icon preview
//!
//! # Modules
//!
//! - [`composer`]: the submit state machine and auto-growing input
//! - [`dom`]: element traits and in-memory implementations
//! - [`transport`]: message delivery over HTTP
//! - [`escape`]: HTML escaping for server-supplied text
//! - [`message`]: draft, payload and confirmed message types
//! - [`config`]: CLI, file and environment configuration
//! - [`settings`], [`navigation`], [`profile`]: the remaining page scripts

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::missing_fields_in_debug)]

pub mod composer;
pub mod config;
pub mod dom;
pub mod error;
pub mod escape;
pub mod message;
pub mod navigation;
pub mod profile;
pub mod settings;
pub mod transport;

pub use composer::{ChatComposer, ComposerElements, ComposerOptions, SubmitOutcome};
pub use error::{ComposerError, SendError};
pub use transport::{HttpTransport, MessageTransport};
