//! [`Document`] to HTML text serialization.

use std::fmt::Write;

use crate::utils::html::{escape, is_raw_text_element, is_void_element};

use super::{Document, NodeId, NodeKind};

impl Document {
    /// Serialize the document back to HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(doctype) = &self.doctype {
            out.push_str(doctype);
            out.push('\n');
        }
        for &child in self.children(self.root()) {
            self.render_node(child, false, &mut out);
        }
        out
    }

    fn render_node(&self, node: NodeId, raw_text: bool, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => {
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&escape(text));
                }
            }
            NodeKind::Element { tag, attrs } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    if value.is_empty() {
                        // boolean attribute (required, disabled, ...)
                        let _ = write!(out, " {name}");
                    } else {
                        let _ = write!(out, " {name}=\"{}\"", escape(value));
                    }
                }
                out.push('>');

                if is_void_element(tag) {
                    return;
                }

                let raw = is_raw_text_element(tag);
                for &child in self.children(node) {
                    self.render_node(child, raw, out);
                }

                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_roundtrips_structure() {
        let doc = Document::parse(
            "<div id=\"a\" class=\"x y\"><label><input type=\"radio\" value=\"OL1\">First</label></div>",
        )
        .unwrap();
        let html = doc.render();
        assert!(html.contains("<div id=\"a\" class=\"x y\">"));
        assert!(html.contains("<input type=\"radio\" value=\"OL1\">"));
        assert!(html.contains("First</label></div>"));
        // void element: no closing tag
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn render_boolean_attrs_bare() {
        let doc = Document::parse("<select required></select>").unwrap();
        assert!(doc.render().contains("<select required>"));
    }

    #[test]
    fn render_escapes_text_and_attrs() {
        let mut doc = Document::parse("<p></p>").unwrap();
        let p = doc.query_selector("p").unwrap();
        let text = doc.create_text("a < b & c");
        doc.append_child(p, text);
        doc.set_attr(p, "title", "say \"hi\"");
        let html = doc.render();
        assert!(html.contains("a &lt; b &amp; c"));
        assert!(html.contains("title=\"say &quot;hi&quot;\""));
    }

    #[test]
    fn render_emits_doctype() {
        let doc = Document::parse("<!DOCTYPE html><html><body></body></html>").unwrap();
        assert!(doc.render().starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn render_keeps_script_raw() {
        let doc = Document::parse("<script>if (a && b) {}</script>").unwrap();
        assert!(doc.render().contains("if (a && b) {}"));
    }
}
