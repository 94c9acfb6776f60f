//! HTML escaping for server-supplied text.

/// Replace `& < > " '` with named character references.
///
/// `&` is replaced first so the references produced by later substitutions
/// are not escaped a second time.
///
/// # Example
///
/// ```rust
/// use chat_composer::escape::escape_html;
///
/// assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(unsafe_text: &str) -> String {
    unsafe_text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Decode the references `escape_html` produces, the way a markup parser
    /// would when reading text content.
    fn decode(escaped: &str) -> String {
        let mut out = String::new();
        let mut rest = escaped;
        while let Some(pos) = rest.find('&') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];
            let (ch, len) = [
                ("&amp;", '&'),
                ("&lt;", '<'),
                ("&gt;", '>'),
                ("&quot;", '"'),
                ("&#039;", '\''),
            ]
            .iter()
            .find(|(reference, _)| rest.starts_with(reference))
            .map(|(reference, ch)| (*ch, reference.len()))
            .expect("unrecognized character reference");
            out.push(ch);
            rest = &rest[len..];
        }
        out.push_str(rest);
        out
    }

    fn assert_no_raw_markup(escaped: &str) {
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        for (pos, _) in escaped.match_indices('&') {
            let tail = &escaped[pos..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
                    .iter()
                    .any(|reference| tail.starts_with(reference)),
                "raw ampersand in {escaped}"
            );
        }
    }

    #[test]
    fn test_each_character() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn test_no_double_escaping() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(decode(&escape_html("&lt;")), "&lt;");
    }

    #[test]
    fn test_round_trip_for_all_orderings() {
        let specials = ['&', '<', '>', '"', '\''];
        let mut samples = vec![
            String::new(),
            "plain text".to_string(),
            "<script>alert('x')</script>".to_string(),
            "a && b || \"c\" <> 'd'".to_string(),
            "&amp;&#039;&quot;".to_string(),
        ];
        for a in specials {
            for b in specials {
                for c in specials {
                    samples.push(format!("{a}x{b}{c} y"));
                }
            }
        }

        for sample in samples {
            let escaped = escape_html(&sample);
            assert_no_raw_markup(&escaped);
            assert_eq!(decode(&escaped), sample);
        }
    }

    #[test]
    fn test_pure() {
        let input = "<p class='x'>Tom & Jerry</p>";
        assert_eq!(escape_html(input), escape_html(input));
    }
}
