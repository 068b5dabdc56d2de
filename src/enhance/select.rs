//! Searchable-select attachment.
//!
//! The widget library itself is an external collaborator; what this pass
//! owns is *which* elements get enhanced and *with what options*. The
//! attachment goes through [`SelectWidget`] so the option computation stays
//! testable and the concrete widget replaceable.

use rustc_hash::FxHashSet;

use crate::config::SelectsConfig;
use crate::dom::{Document, NodeId};

/// Marker class the default widget leaves on attached elements.
pub const WIDGET_CLASS: &str = "folio-select";

/// Options passed to the widget on attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Whether the widget accepts an empty selection.
    pub allow_empty_option: bool,
    /// Whether the dropdown closes after a value is picked.
    pub close_after_select: bool,
}

/// The searchable-dropdown capability consumed by the enhancer.
pub trait SelectWidget {
    /// Attach the widget to `select` with the computed `options`.
    fn attach(&mut self, doc: &mut Document, select: NodeId, options: &WidgetOptions);
}

/// Default widget: records the computed options into `data-*` attributes and
/// tags the element with [`WIDGET_CLASS`] for the bundled client script.
#[derive(Debug, Default)]
pub struct MarkupWidget;

impl SelectWidget for MarkupWidget {
    fn attach(&mut self, doc: &mut Document, select: NodeId, options: &WidgetOptions) {
        doc.set_attr(
            select,
            "data-allow-empty-option",
            bool_attr(options.allow_empty_option),
        );
        doc.set_attr(
            select,
            "data-close-after-select",
            bool_attr(options.close_after_select),
        );
        doc.add_class(select, WIDGET_CLASS);
    }
}

fn bool_attr(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}

/// Applies the select passes of one page load.
///
/// Tracks attached elements so an element is enhanced at most once even when
/// both passes match it (the tags field is also a `<select>`).
pub struct SelectEnhancer<'a> {
    config: &'a SelectsConfig,
    attached: FxHashSet<NodeId>,
}

impl<'a> SelectEnhancer<'a> {
    pub fn new(config: &'a SelectsConfig) -> Self {
        Self {
            config,
            attached: FxHashSet::default(),
        }
    }

    /// Tags pass: the known-optional tags field gets fixed options.
    ///
    /// Returns the number of attachments (zero when the field is absent).
    pub fn enhance_tags(&mut self, doc: &mut Document, widget: &mut dyn SelectWidget) -> usize {
        if !self.config.tags {
            return 0;
        }
        let options = WidgetOptions {
            allow_empty_option: true,
            close_after_select: true,
        };
        let mut count = 0;
        for select in doc.query_selector_all(&self.config.tags_selector) {
            if self.attached.insert(select) {
                widget.attach(doc, select, &options);
                count += 1;
            }
        }
        count
    }

    /// Generic pass: every remaining select; a select that is not `required`
    /// may be left empty.
    pub fn enhance_generic(&mut self, doc: &mut Document, widget: &mut dyn SelectWidget) -> usize {
        if !self.config.generic {
            return 0;
        }
        let mut count = 0;
        for select in doc.query_selector_all(&self.config.generic_selector) {
            if !self.attached.insert(select) {
                continue;
            }
            let options = WidgetOptions {
                allow_empty_option: !doc.has_attr(select, "required"),
                close_after_select: self.config.close_after_select,
            };
            widget.attach(doc, select, &options);
            count += 1;
        }
        count
    }
}
