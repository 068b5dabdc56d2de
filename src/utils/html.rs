//! HTML text utilities used by the document serializer.

use std::borrow::Cow;

/// Characters that require escaping in text or attribute context.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn entity_for(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters.
///
/// Returns `Cow::Borrowed` when nothing needs escaping, which is the common
/// case for attribute values like ids and class lists.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity_for(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Void elements have no children and serialize without a closing tag.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Raw text elements (script/style) serialize their content unescaped.
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_passthrough_borrows() {
        assert!(matches!(escape("id_tags"), Cow::Borrowed(_)));
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn void_elements() {
        assert!(is_void_element("img"));
        assert!(is_void_element("input"));
        assert!(!is_void_element("select"));
        assert!(!is_void_element("label"));
    }

    #[test]
    fn raw_text_elements() {
        assert!(is_raw_text_element("script"));
        assert!(!is_raw_text_element("textarea"));
    }
}
