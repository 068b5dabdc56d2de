//! HTML text to [`Document`] conversion using `tl`.

use anyhow::{Result, anyhow};

use super::{Document, NodeData, NodeId, NodeKind};

impl Document {
    /// Parse an HTML page into an owned document.
    ///
    /// A leading `<!DOCTYPE ...>` is captured and re-emitted verbatim on
    /// serialization; comments are dropped.
    pub fn parse(html: &str) -> Result<Self> {
        let mut doc = Self::empty();
        doc.doctype = extract_doctype(html);

        let dom = tl::parse(html, tl::ParserOptions::default())
            .map_err(|e| anyhow!("HTML parse failed: {e}"))?;

        let parser = dom.parser();
        let root = doc.root();
        for handle in dom.children() {
            convert_node(&mut doc, root, *handle, parser);
        }
        Ok(doc)
    }
}

/// Capture a leading doctype declaration, if any.
///
/// Compares raw bytes: slicing the str would panic when the page opens with
/// multibyte text that straddles the prefix boundary.
fn extract_doctype(html: &str) -> Option<String> {
    let trimmed = html.trim_start();
    let prefix = trimmed.as_bytes().get(..9)?;
    if prefix.eq_ignore_ascii_case(b"<!doctype") {
        let end = trimmed.find('>')?;
        return Some(trimmed[..=end].to_string());
    }
    None
}

/// Convert one `tl` node (and its subtree) into arena nodes under `parent`.
fn convert_node(doc: &mut Document, parent: NodeId, handle: tl::NodeHandle, parser: &tl::Parser) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let tag_name = tag.name().as_utf8_str().to_lowercase();

            let mut attrs = Vec::new();
            for (key, value) in tag.attributes().iter() {
                let key: &str = key.as_ref();
                let value = value.map(|v| v.to_string()).unwrap_or_default();
                attrs.push((key.to_string(), value));
            }

            let elem = doc.push_node(NodeData {
                kind: NodeKind::Element {
                    tag: tag_name,
                    attrs,
                },
                parent: Some(parent),
                children: Vec::new(),
            });
            doc.nodes[parent.0].children.push(elem);

            for child_handle in tag.children().top().iter() {
                convert_node(doc, elem, *child_handle, parser);
            }
        }
        tl::Node::Raw(bytes) => {
            let text = bytes.as_utf8_str();
            // Markup declarations (doctype) surface as raw nodes; the
            // doctype is handled separately at the document level.
            if text.starts_with("<!") {
                return;
            }
            let text_node = doc.push_node(NodeData {
                kind: NodeKind::Text(text.to_string()),
                parent: Some(parent),
                children: Vec::new(),
            });
            doc.nodes[parent.0].children.push(text_node);
        }
        tl::Node::Comment(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_structure() {
        let doc = Document::parse(
            "<div id=\"outer\"><label><input type=\"radio\" value=\"OL1\">First</label></div>",
        )
        .unwrap();
        let outer = doc.by_id("outer").unwrap();
        let label = doc.children(outer)[0];
        assert_eq!(doc.tag_name(label), Some("label"));
        let input = doc.find_descendant_by_tag(label, "input").unwrap();
        assert_eq!(doc.attr(input, "value"), Some("OL1"));
    }

    #[test]
    fn parse_keeps_doctype() {
        let doc = Document::parse("<!DOCTYPE html>\n<html><body></body></html>").unwrap();
        assert_eq!(doc.doctype.as_deref(), Some("<!DOCTYPE html>"));
    }

    #[test]
    fn parse_multibyte_leading_text() {
        // first non-whitespace bytes are multibyte and misaligned at the
        // doctype prefix width; must not panic
        let doc = Document::parse("ééééé<html><body></body></html>").unwrap();
        assert!(doc.doctype.is_none());

        let doc = Document::parse("  \u{00e9}\u{4e16}\u{754c}<div id=\"x\"></div>").unwrap();
        assert!(doc.by_id("x").is_some());
    }

    #[test]
    fn parse_uppercase_tags_normalized() {
        let doc = Document::parse("<DIV ID=\"x\"></DIV>").unwrap();
        // tl normalizes attribute names; tags are lowercased on conversion
        let div = doc
            .descendant_elements(doc.root())
            .into_iter()
            .find(|&n| doc.tag_name(n) == Some("div"));
        assert!(div.is_some());
    }

    #[test]
    fn comments_are_dropped() {
        let doc = Document::parse("<div><!-- note --><span></span></div>").unwrap();
        let div = doc.descendant_elements(doc.root())[0];
        assert_eq!(doc.children(div).len(), 1);
    }
}
