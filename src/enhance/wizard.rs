//! Edition-wizard cover decoration.
//!
//! On the wizard's edition-selection step, each radio option's value is an
//! OLID-style catalog identifier. The pass prepends a cover thumbnail to
//! every option label, with the image URL built from a configured template.
//! Image loading itself is delegated to the browser via `src`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::config::CoversConfig;
use crate::dom::Document;

/// Path-segment escaping for the identifier substituted into the template.
/// The id is opaque page data; it must not be able to extend the URL path
/// or introduce a query.
const COVER_ID: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'/')
    .add(b'\\');

/// Prepends cover thumbnails to wizard option labels.
pub struct CoverDecorator<'a> {
    config: &'a CoversConfig,
}

impl<'a> CoverDecorator<'a> {
    pub fn new(config: &'a CoversConfig) -> Self {
        Self { config }
    }

    /// Build the cover image URL for a catalog identifier.
    pub fn cover_url(&self, id: &str) -> String {
        let encoded = utf8_percent_encode(id, COVER_ID).to_string();
        self.config.template.replace("{id}", &encoded)
    }

    /// Run the decoration pass once. Returns the number of images inserted.
    ///
    /// Only runs when the wizard-step marker element is present; on any other
    /// page this is a no-op. Labels without a nested input, or with an empty
    /// value, are left untouched.
    pub fn decorate(&self, doc: &mut Document) -> usize {
        if !self.config.enable {
            return 0;
        }
        if doc.by_id(&self.config.marker).is_none() {
            return 0;
        }

        let mut count = 0;
        for label in doc.query_selector_all(&self.config.options_selector) {
            let Some(input) = doc.find_descendant_by_tag(label, "input") else {
                continue;
            };
            let Some(id) = doc.attr(input, "value").map(str::to_string) else {
                continue;
            };
            if id.is_empty() {
                continue;
            }

            let img = doc.create_element("img");
            doc.set_attr(img, "src", &self.cover_url(&id));
            doc.set_attr(img, "alt", &id);
            doc.prepend_child(label, img);
            count += 1;
        }
        count
    }
}
