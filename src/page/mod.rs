//! Page runtime: the host-page lifecycle, made explicit.
//!
//! In the browser the three behaviors hang off `DOMContentLoaded` plus the
//! toggle's click/blur listeners. Here that becomes: [`Page::open`] parses
//! the document, [`Page::ready`] runs the enhancement passes and binds the
//! toggle exactly once, and [`Page::click`]/[`Page::blur`] deliver events
//! synchronously to the binding. Focus is tracked per page so the toggle's
//! focus side effect is observable.
//!
//! The three components are independent: a failed toggle binding (violated
//! markup contract) is reported in the ready summary but does not stop the
//! document enhancements.

use anyhow::Result;

use crate::config::FolioConfig;
use crate::dom::{Document, NodeId};
use crate::enhance::{CoverDecorator, MarkupWidget, SelectEnhancer, SelectWidget};
use crate::toggle::{NavToggle, Surfaces, ToggleError};

/// Outcome of the toggle setup during `ready`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleStatus {
    /// Click/blur handlers are bound.
    Bound,
    /// Disabled by configuration.
    Disabled,
    /// The markup contract is violated; the toggle is inert.
    Failed(ToggleError),
}

/// What `ready` did.
#[derive(Debug)]
pub struct ReadySummary {
    /// Selects enhanced (tags + generic passes).
    pub selects: usize,
    /// Cover images prepended.
    pub covers: usize,
    /// Toggle setup outcome.
    pub toggle: ToggleStatus,
}

/// Nav nodes resolved once at setup.
struct Binding {
    link: NodeId,
    menu: NodeId,
    form: NodeId,
    input: NodeId,
    machine: NavToggle,
}

/// A loaded catalogue page.
pub struct Page<'cfg> {
    doc: Document,
    config: &'cfg FolioConfig,
    focused: Option<NodeId>,
    binding: Option<Binding>,
    /// Toggle outcome of the first `ready` run; `None` until it runs.
    toggle_status: Option<ToggleStatus>,
}

impl<'cfg> Page<'cfg> {
    /// Parse a rendered page.
    pub fn open(html: &str, config: &'cfg FolioConfig) -> Result<Self> {
        Ok(Self {
            doc: Document::parse(html)?,
            config,
            focused: None,
            binding: None,
            toggle_status: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Run the page-load enhancements once, with the default markup widget.
    pub fn ready(&mut self) -> ReadySummary {
        self.ready_with(&mut MarkupWidget)
    }

    /// Run the page-load enhancements once.
    ///
    /// A second call is a no-op reporting zero work: the behaviors assume
    /// single execution per page load (the wizard pass in particular is not
    /// idempotent).
    pub fn ready_with(&mut self, widget: &mut dyn SelectWidget) -> ReadySummary {
        if let Some(status) = &self.toggle_status {
            return ReadySummary {
                selects: 0,
                covers: 0,
                toggle: status.clone(),
            };
        }

        let mut enhancer = SelectEnhancer::new(&self.config.selects);
        let mut selects = enhancer.enhance_tags(&mut self.doc, widget);
        selects += enhancer.enhance_generic(&mut self.doc, widget);

        let covers = CoverDecorator::new(&self.config.covers).decorate(&mut self.doc);

        let toggle = if self.config.nav.enable {
            match self.bind_toggle() {
                Ok(binding) => {
                    self.binding = Some(binding);
                    ToggleStatus::Bound
                }
                Err(e) => ToggleStatus::Failed(e),
            }
        } else {
            ToggleStatus::Disabled
        };
        self.toggle_status = Some(toggle.clone());

        ReadySummary {
            selects,
            covers,
            toggle,
        }
    }

    /// Resolve the nav nodes. Every target is singular and required.
    fn bind_toggle(&self) -> Result<Binding, ToggleError> {
        let nav = &self.config.nav;
        let resolve = |selector: &str| {
            self.doc
                .query_selector(selector)
                .ok_or_else(|| ToggleError::MissingTarget {
                    selector: selector.to_string(),
                })
        };

        let link = resolve(&nav.link)?;
        let menu = resolve(&nav.menu)?;
        let form = resolve(&nav.form)?;
        let input = self.doc.find_descendant_by_tag(form, "input").ok_or_else(|| {
            ToggleError::MissingTarget {
                selector: format!("{} input", nav.form),
            }
        })?;

        Ok(Binding {
            link,
            menu,
            form,
            input,
            machine: NavToggle::new(),
        })
    }

    /// Deliver a click to the node matching `selector`.
    ///
    /// Returns whether default navigation was suppressed. Clicks anywhere
    /// but the bound catalogue link have no modeled effect.
    pub fn click(&mut self, selector: &str) -> bool {
        let Some(target) = self.doc.query_selector(selector) else {
            return false;
        };
        let Some(binding) = self.binding.as_mut() else {
            return false;
        };
        if target != binding.link {
            return false;
        }

        let mut surfaces = DomSurfaces {
            doc: &mut self.doc,
            menu: binding.menu,
            form: binding.form,
            input: binding.input,
            hidden_class: &self.config.nav.hidden_class,
            focused: &mut self.focused,
        };
        binding.machine.click(&mut surfaces)
    }

    /// Deliver a blur to the node matching `selector`.
    pub fn blur(&mut self, selector: &str) {
        let Some(target) = self.doc.query_selector(selector) else {
            return;
        };
        if self.focused == Some(target) {
            self.focused = None;
        }
        let Some(binding) = self.binding.as_mut() else {
            return;
        };
        if target != binding.input {
            return;
        }

        let mut surfaces = DomSurfaces {
            doc: &mut self.doc,
            menu: binding.menu,
            form: binding.form,
            input: binding.input,
            hidden_class: &self.config.nav.hidden_class,
            focused: &mut self.focused,
        };
        binding.machine.blur(&mut surfaces);
    }
}

/// DOM-backed toggle surfaces: visibility is the configured hidden class.
struct DomSurfaces<'a> {
    doc: &'a mut Document,
    menu: NodeId,
    form: NodeId,
    input: NodeId,
    hidden_class: &'a str,
    focused: &'a mut Option<NodeId>,
}

impl Surfaces for DomSurfaces<'_> {
    fn set_menu_hidden(&mut self, hidden: bool) {
        if hidden {
            self.doc.add_class(self.menu, self.hidden_class);
        } else {
            self.doc.remove_class(self.menu, self.hidden_class);
        }
    }

    fn set_search_hidden(&mut self, hidden: bool) {
        if hidden {
            self.doc.add_class(self.form, self.hidden_class);
        } else {
            self.doc.remove_class(self.form, self.hidden_class);
        }
    }

    fn focus_search(&mut self) {
        *self.focused = Some(self.input);
    }
}
