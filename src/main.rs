//! Chat Composer command line
//!
//! Drives the composer headlessly: the draft comes from `--message` or stdin,
//! is posted to the configured chat endpoint once, and the appended message
//! markup is printed.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::io::Read;
use std::rc::Rc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chat_composer::composer::{ChatComposer, ComposerElements, SubmitOutcome};
use chat_composer::config::{AppConfig, Cli};
use chat_composer::dom::memory::{
    MemoryButton, MemoryForm, MemoryMessageList, MemoryTextArea, RecordingNotifier,
};
use chat_composer::transport::HttpTransport;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    // Logs go to stderr so stdout carries only the rendered message.
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn read_draft(cli: &Cli) -> anyhow::Result<String> {
    if let Some(message) = &cli.message {
        return Ok(message.clone());
    }
    let mut draft = String::new();
    std::io::stdin()
        .read_to_string(&mut draft)
        .context("failed to read message from stdin")?;
    Ok(draft)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli).context("failed to load configuration")?;
    let endpoint = config
        .endpoint
        .message_url()
        .context("invalid chat endpoint")?;

    info!(
        name: "composer.config.loaded",
        endpoint = %endpoint,
        encoding = ?config.endpoint.encoding,
        "Configuration loaded"
    );

    let transport = HttpTransport::new(endpoint.as_str())?.with_encoding(config.endpoint.encoding);

    let mut form = MemoryForm::new();
    if let Some(chat_id) = &cli.chat_id {
        form = form.with_field(config.endpoint.chat_id_field.as_str(), chat_id.as_str());
    }
    let list = Rc::new(MemoryMessageList::default());
    let notifier = Rc::new(RecordingNotifier::new());
    let elements = ComposerElements {
        form: Rc::new(form),
        input: Rc::new(MemoryTextArea::new(read_draft(&cli)?)),
        list: Rc::clone(&list) as _,
        submit: Rc::new(MemoryButton::new(config.composer.idle_label.as_str())),
        notifier: Rc::clone(&notifier) as _,
    };

    let composer = ChatComposer::mount(elements, Rc::new(transport), config.composer);

    match composer.on_submit().await {
        SubmitOutcome::Delivered => {
            for item in list.items() {
                println!("{item}");
            }
            Ok(())
        }
        SubmitOutcome::Skipped | SubmitOutcome::Blocked => {
            info!(name: "composer.submit.noop", "Nothing to send");
            Ok(())
        }
        SubmitOutcome::Failed(err) => {
            for notice in notifier.alerts() {
                eprintln!("{notice}");
            }
            Err(err.into())
        }
    }
}
