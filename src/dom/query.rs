//! Minimal selector engine.
//!
//! Supports exactly the selector shapes the page contracts use: a compound
//! of `tag`, `#id` and `.class` parts, combined with the descendant
//! combinator (whitespace). `select#id_tags`, `#wizard-edition label`,
//! `nav #catalogue-link` all resolve here; anything fancier is out of scope.

use super::{Document, NodeId};

/// A parsed selector: one or more compound parts related by descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Parse a selector string. Returns `None` for empty or malformed input.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = Vec::new();
        for token in input.split_ascii_whitespace() {
            parts.push(parse_compound(token)?);
        }
        if parts.is_empty() {
            return None;
        }
        Some(Self { parts })
    }

    /// Whether `node` matches the final compound with all ancestor parts
    /// satisfied in order.
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((last, ancestors)) = self.parts.split_last() else {
            return false;
        };
        if !matches_compound(doc, node, last) {
            return false;
        }

        // Each remaining part must match some strictly higher ancestor,
        // right-to-left.
        let mut cursor = doc.parent(node);
        for part in ancestors.iter().rev() {
            let mut satisfied = false;
            while let Some(candidate) = cursor {
                cursor = doc.parent(candidate);
                if matches_compound(doc, candidate, part) {
                    satisfied = true;
                    break;
                }
            }
            if !satisfied {
                return false;
            }
        }
        true
    }
}

fn parse_compound(token: &str) -> Option<Compound> {
    let mut part = Compound::default();
    let mut rest = token;

    // Leading tag name, up to the first `#` or `.`
    let tag_end = rest.find(['#', '.']).unwrap_or(rest.len());
    if tag_end > 0 {
        part.tag = Some(rest[..tag_end].to_ascii_lowercase());
    }
    rest = &rest[tag_end..];

    while !rest.is_empty() {
        let marker = rest.as_bytes()[0];
        rest = &rest[1..];
        let end = rest.find(['#', '.']).unwrap_or(rest.len());
        let name = &rest[..end];
        if name.is_empty() {
            return None;
        }
        match marker {
            b'#' => part.id = Some(name.to_string()),
            b'.' => part.classes.push(name.to_string()),
            _ => return None,
        }
        rest = &rest[end..];
    }

    if part.tag.is_none() && part.id.is_none() && part.classes.is_empty() {
        return None;
    }
    Some(part)
}

fn matches_compound(doc: &Document, node: NodeId, part: &Compound) -> bool {
    let Some(tag) = doc.tag_name(node) else {
        return false;
    };
    if let Some(want) = &part.tag
        && tag != want
    {
        return false;
    }
    if let Some(id) = &part.id
        && doc.attr(node, "id") != Some(id.as_str())
    {
        return false;
    }
    part.classes.iter().all(|c| doc.has_class(node, c))
}

impl Document {
    /// First element matching `selector`, in document order.
    ///
    /// Malformed selectors match nothing.
    pub fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let sel = Selector::parse(selector)?;
        self.descendant_elements(self.root())
            .into_iter()
            .find(|&node| sel.matches(self, node))
    }

    /// All elements matching `selector`, in document order.
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.descendant_elements(self.root())
            .into_iter()
            .filter(|&node| sel.matches(self, node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::parse(
            r#"<body>
                <nav><a id="catalogue-link" href="/catalogue">Catalogue</a></nav>
                <nav id="nav-links" class="menu"></nav>
                <nav id="catalogue-form"><input type="search"></nav>
                <div id="wizard-edition"></div>
                <div id="id_edition-edition_selection">
                    <label><input type="radio" value="OL1"></label>
                    <label><input type="radio" value="OL2"></label>
                </div>
                <select id="id_tags"></select>
                <select required></select>
            </body>"#,
        )
        .unwrap()
    }

    #[test]
    fn tag_selector() {
        let doc = doc();
        assert_eq!(doc.query_selector_all("select").len(), 2);
        assert_eq!(doc.query_selector_all("label").len(), 2);
        assert!(doc.query_selector("video").is_none());
    }

    #[test]
    fn id_selector() {
        let doc = doc();
        let n = doc.query_selector("#wizard-edition").unwrap();
        assert_eq!(doc.tag_name(n), Some("div"));
    }

    #[test]
    fn compound_tag_and_id() {
        let doc = doc();
        let n = doc.query_selector("select#id_tags").unwrap();
        assert_eq!(doc.attr(n, "id"), Some("id_tags"));
        // id exists but on a different tag
        assert!(doc.query_selector("span#id_tags").is_none());
    }

    #[test]
    fn descendant_combinator() {
        let doc = doc();
        let link = doc.query_selector("nav #catalogue-link").unwrap();
        assert_eq!(doc.tag_name(link), Some("a"));

        let labels = doc.query_selector_all("#id_edition-edition_selection label");
        assert_eq!(labels.len(), 2);

        // descendant must actually be nested
        assert!(doc.query_selector("label #catalogue-link").is_none());
    }

    #[test]
    fn class_selector() {
        let doc = doc();
        let n = doc.query_selector("nav.menu").unwrap();
        assert_eq!(doc.attr(n, "id"), Some("nav-links"));
    }

    #[test]
    fn malformed_selectors_match_nothing() {
        let doc = doc();
        assert!(doc.query_selector("").is_none());
        assert!(doc.query_selector("#").is_none());
        assert!(doc.query_selector_all("..").is_empty());
    }
}
