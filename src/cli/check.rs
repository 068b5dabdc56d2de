//! Markup contract verification command.
//!
//! The page behaviors assume the rendered templates carry specific markup:
//! the nav toggle needs its three singular targets plus an inner input, and
//! the wizard pass needs usable inputs inside each option label. A violated
//! contract surfaces at page load as a broken behavior; `check` surfaces it
//! in CI instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::CheckArgs;
use super::common::collect_page_files;
use crate::config::FolioConfig;
use crate::dom::Document;
use crate::log;
use crate::utils::{plural_count, plural_s};

/// A single contract violation
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    /// The selector or element that failed.
    pub target: String,
    /// Violation reason/message.
    pub reason: String,
}

/// Contract report, grouped by source page.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub pages: BTreeMap<String, Vec<Violation>>,
}

impl CheckReport {
    fn add(&mut self, source: String, violations: Vec<Violation>) {
        if !violations.is_empty() {
            self.pages.entry(source).or_default().extend(violations);
        }
    }

    /// Total violation count.
    pub fn violation_count(&self) -> usize {
        self.pages.values().map(|v| v.len()).sum()
    }

    /// Print the report to stderr.
    pub fn print(&self) {
        if self.pages.is_empty() {
            return;
        }
        eprintln!();

        let file_count = self.pages.len();
        let violation_count = self.violation_count();
        eprintln!(
            "{} {}",
            "contract".red().bold(),
            format!(
                "({file_count} page{}, {violation_count} violation{})",
                plural_s(file_count),
                plural_s(violation_count)
            )
            .dimmed()
        );

        for (path, violations) in &self.pages {
            eprintln!("{}{}{}", "[".dimmed(), path.cyan(), "]".dimmed());
            for v in violations {
                eprintln!("{} {} {}", "→".red(), v.target, v.reason);
            }
        }
    }
}

/// Verify the markup contract across pages
pub fn run_check(args: &CheckArgs, config: &FolioConfig) -> Result<()> {
    let files = collect_page_files(&args.paths)?;
    if files.is_empty() {
        log!("check"; "no pages found");
        return Ok(());
    }

    log!("check"; "checking {}", plural_count(files.len(), "page"));

    let report = build_report(&files, config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    let count = report.violation_count();
    if count == 0 {
        log!("check"; "all contracts hold");
        return Ok(());
    }

    if args.warn_only {
        log!("warning"; "found {} (warn-only)", plural_count(count, "violation"));
        return Ok(());
    }
    anyhow::bail!(
        "found {} in {}",
        plural_count(count, "violation"),
        plural_count(report.pages.len(), "page")
    );
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Check every page, collecting per-page failures into the report.
///
/// An unreadable or unparseable page is itself a violation for that page;
/// it must not mask the report for the rest of the batch.
fn build_report(files: &[std::path::PathBuf], config: &FolioConfig) -> CheckReport {
    let mut report = CheckReport::default();
    for file in files {
        let source = display_path(file);
        match check_file(file, config) {
            Ok(violations) => report.add(source, violations),
            Err(e) => report.add(
                source,
                vec![Violation {
                    target: "page".to_string(),
                    reason: format!("{e:#}"),
                }],
            ),
        }
    }
    report
}

fn check_file(path: &Path, config: &FolioConfig) -> Result<Vec<Violation>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = Document::parse(&content)?;
    Ok(check_page(&doc, config))
}

/// Check one parsed page against the configured contracts.
///
/// Only contracts whose behavior is enabled are checked. The select passes
/// have no contract: zero matches is a documented no-op.
pub fn check_page(doc: &Document, config: &FolioConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if config.nav.enable {
        check_nav(doc, config, &mut violations);
    }
    if config.covers.enable {
        check_covers(doc, config, &mut violations);
    }

    violations
}

/// The toggle contract: three singular targets, an inner input, and the
/// expected initial visibility (menu shown, form hidden).
fn check_nav(doc: &Document, config: &FolioConfig, violations: &mut Vec<Violation>) {
    let nav = &config.nav;

    if doc.query_selector(&nav.link).is_none() {
        push_missing(violations, &nav.link);
    }
    let menu = doc.query_selector(&nav.menu);
    if menu.is_none() {
        push_missing(violations, &nav.menu);
    }
    match doc.query_selector(&nav.form) {
        None => push_missing(violations, &nav.form),
        Some(form) => {
            if doc.find_descendant_by_tag(form, "input").is_none() {
                violations.push(Violation {
                    target: format!("`{} input`", nav.form),
                    reason: "not found".to_string(),
                });
            }
            if !doc.has_class(form, &nav.hidden_class) {
                violations.push(Violation {
                    target: format!("`{}`", nav.form),
                    reason: format!("missing initial `{}` class", nav.hidden_class),
                });
            }
        }
    }
    if let Some(menu) = menu
        && doc.has_class(menu, &nav.hidden_class)
    {
        violations.push(Violation {
            target: format!("`{}`", nav.menu),
            reason: format!("unexpectedly hidden (`{}` class)", nav.hidden_class),
        });
    }
}

fn push_missing(violations: &mut Vec<Violation>, selector: &str) {
    violations.push(Violation {
        target: format!("`{selector}`"),
        reason: "not found".to_string(),
    });
}

/// The wizard contract: when the marker is present, every option label must
/// carry a nested input with a non-empty value.
fn check_covers(doc: &Document, config: &FolioConfig, violations: &mut Vec<Violation>) {
    let covers = &config.covers;
    if doc.by_id(&covers.marker).is_none() {
        return;
    }

    for label in doc.query_selector_all(&covers.options_selector) {
        let usable = doc
            .find_descendant_by_tag(label, "input")
            .and_then(|input| doc.attr(input, "value"))
            .is_some_and(|v| !v.is_empty());
        if !usable {
            violations.push(Violation {
                target: format!("`{}`", covers.options_selector),
                reason: "label without a usable input value".to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_PAGE: &str = r#"<body>
        <nav>
            <a id="catalogue-link" href="/catalogue">Catalogue</a>
            <nav id="nav-links"></nav>
            <nav id="catalogue-form" class="hidden"><input name="q"></nav>
        </nav>
    </body>"#;

    #[test]
    fn test_good_page_has_no_violations() {
        let doc = Document::parse(GOOD_PAGE).unwrap();
        let config = FolioConfig::default();
        assert!(check_page(&doc, &config).is_empty());
    }

    #[test]
    fn test_missing_form_is_reported() {
        let doc = Document::parse(
            r#"<nav><a id="catalogue-link"></a><nav id="nav-links"></nav></nav>"#,
        )
        .unwrap();
        let config = FolioConfig::default();
        let violations = check_page(&doc, &config);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].target.contains("nav#catalogue-form"));
    }

    #[test]
    fn test_form_without_input_and_hidden_class() {
        let doc = Document::parse(
            r#"<nav><a id="catalogue-link"></a><nav id="nav-links"></nav>
               <nav id="catalogue-form"></nav></nav>"#,
        )
        .unwrap();
        let config = FolioConfig::default();
        let violations = check_page(&doc, &config);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_wizard_label_without_value() {
        let html = format!(
            r#"{GOOD_PAGE}
            <div id="wizard-edition">
                <div id="id_edition-edition_selection">
                    <label><input type="radio" value="OL1">ok</label>
                    <label>no input here</label>
                </div>
            </div>"#
        );
        let doc = Document::parse(&html).unwrap();
        let config = FolioConfig::default();
        let violations = check_page(&doc, &config);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].reason.contains("usable input"));
    }

    #[test]
    fn test_unreadable_page_does_not_abort_batch() {
        use std::fs;

        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.html");
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap(); // not UTF-8
        let good = dir.path().join("good.html");
        fs::write(&good, GOOD_PAGE).unwrap();

        let config = FolioConfig::default();
        let report = build_report(&[bad.clone(), good], &config);

        // only the unreadable page is reported, as its own violation
        assert_eq!(report.pages.len(), 1);
        let violations = &report.pages[&bad.to_string_lossy().to_string()];
        assert!(violations[0].reason.contains("reading"));
    }

    #[test]
    fn test_disabled_sections_are_not_checked() {
        let doc = Document::parse("<body></body>").unwrap();
        let mut config = FolioConfig::default();
        config.nav.enable = false;
        assert!(check_page(&doc, &config).is_empty());
    }
}
