//! Markup for a confirmed message.

use crate::escape::escape_html;
use crate::message::SentMessage;

/// Render the list item for a message the current user sent.
///
/// Both server-supplied fields are escaped.
pub fn sent_message_markup(message: &SentMessage) -> String {
    format!(
        r#"<div class="l-chatMain__message p-message --sent">
  <div class="l-chatMain__content p-message__content">
    <p class="p-message__text c-txt">{content}</p>
    <time class="p-message__time c-time">{created_at}</time>
  </div>
</div>"#,
        content = escape_html(&message.content),
        created_at = escape_html(&message.created_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_escaped() {
        let markup = sent_message_markup(&SentMessage::new("<b>hi</b>", "12:00"));
        assert!(markup.contains(r#"<p class="p-message__text c-txt">&lt;b&gt;hi&lt;/b&gt;</p>"#));
        assert!(markup.contains(r#"<time class="p-message__time c-time">12:00</time>"#));
        assert!(!markup.contains("<b>"));
    }

    #[test]
    fn test_timestamp_is_escaped() {
        let markup = sent_message_markup(&SentMessage::new("hi", "<img src=x>"));
        assert!(markup.contains("&lt;img src=x&gt;"));
        assert!(!markup.contains("<img"));
    }

    #[test]
    fn test_sent_class() {
        let markup = sent_message_markup(&SentMessage::new("hi", "12:00"));
        assert!(markup.starts_with(r#"<div class="l-chatMain__message p-message --sent">"#));
    }
}
