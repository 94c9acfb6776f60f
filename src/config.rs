use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use url::Url;

use crate::composer::ComposerOptions;
use crate::transport::FormEncoding;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Base URL of the chat server
    #[arg(long, env = "CHAT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Conversation to post into
    #[arg(long, env = "CHAT_ID")]
    pub chat_id: Option<String>,

    /// Message text (read from stdin when omitted)
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub endpoint: EndpointConfig,
    pub composer: ComposerOptions,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EndpointConfig {
    pub base_url: String,
    pub message_path: String,
    pub encoding: FormEncoding,
    /// Name of the hidden form field carrying the conversation ID.
    pub chat_id_field: String,
}

impl EndpointConfig {
    /// Full URL messages are posted to.
    pub fn message_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(&self.message_path)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    /// Layer defaults, config file, `CHAT_COMPOSER_*` variables and CLI flags.
    ///
    /// Priority: CLI flag (or its env var) > prefixed env var > file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let defaults = ComposerOptions::default();
        let mut builder = Config::builder()
            .set_default("endpoint.base_url", "http://127.0.0.1:8080")?
            .set_default("endpoint.message_path", "/chat")?
            .set_default("endpoint.encoding", "urlencoded")?
            .set_default("endpoint.chat_id_field", "chatID")?
            .set_default("composer.content_field", defaults.content_field)?
            .set_default("composer.submit_modifier", "ctrl")?
            .set_default("composer.idle_label", defaults.idle_label)?
            .set_default("composer.sending_label", defaults.sending_label)?
            .set_default("composer.failure_notice", defaults.failure_notice)?;

        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("composer").required(false)),
        };

        // E.g. CHAT_COMPOSER_ENDPOINT__BASE_URL=http://localhost:9090
        builder = builder.add_source(
            Environment::with_prefix("CHAT_COMPOSER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(endpoint) = &cli.endpoint {
            builder = builder.set_override("endpoint.base_url", endpoint.as_str())?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_url_joins_path() {
        let endpoint = EndpointConfig {
            base_url: "http://localhost:8080".to_string(),
            message_path: "/chat".to_string(),
            encoding: FormEncoding::UrlEncoded,
            chat_id_field: "chatID".to_string(),
        };
        assert_eq!(
            endpoint.message_url().unwrap().as_str(),
            "http://localhost:8080/chat"
        );
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "chat-composer",
            "--endpoint",
            "http://chat.test",
            "--chat-id",
            "c42",
            "-m",
            "hello",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("http://chat.test"));
        assert_eq!(cli.chat_id.as_deref(), Some("c42"));
        assert_eq!(cli.message.as_deref(), Some("hello"));
    }
}
