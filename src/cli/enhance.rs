//! Batch page enhancement command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::EnhanceArgs;
use super::common::collect_page_files;
use crate::config::FolioConfig;
use crate::log;
use crate::logger::ProgressLine;
use crate::page::{Page, ReadySummary, ToggleStatus};
use crate::utils::{plural_count, plural_s};

/// Apply the document enhancements to rendered pages.
///
/// Pages are rewritten in place unless `--output` names a directory, in
/// which case relative inputs keep their path under it and absolute inputs
/// are flattened to their file name.
pub fn run_enhance(args: &EnhanceArgs, config: &FolioConfig) -> Result<()> {
    crate::logger::set_verbose(args.verbose);

    let files = collect_page_files(&args.paths)?;
    if files.is_empty() {
        log!("enhance"; "no pages found");
        return Ok(());
    }

    log!("enhance"; "enhancing {}", plural_count(files.len(), "page"));

    let progress = ProgressLine::new(&[("pages", files.len())]);
    let mut selects = 0usize;
    let mut covers = 0usize;
    let mut failures: Vec<(PathBuf, anyhow::Error)> = Vec::new();

    for file in &files {
        match enhance_file(file, config) {
            Ok(summary) => {
                selects += summary.selects;
                covers += summary.covers;
                if let ToggleStatus::Failed(e) = &summary.toggle {
                    crate::debug!("enhance"; "{}: {}", file.display(), e);
                }
                write_page(file, args.output.as_deref(), &summary.html)?;
            }
            Err(e) => failures.push((file.clone(), e)),
        }
        progress.inc("pages");
    }
    progress.finish();

    log!("enhance"; "attached {} select widget{}, {} cover thumbnail{}",
        selects, plural_s(selects), covers, plural_s(covers));

    if !failures.is_empty() {
        for (path, e) in &failures {
            log!("error"; "{}: {:#}", path.display(), e);
        }
        anyhow::bail!("failed to enhance {}", plural_count(failures.len(), "page"));
    }
    Ok(())
}

/// One enhanced page, ready to write back.
struct EnhancedPage {
    selects: usize,
    covers: usize,
    toggle: ToggleStatus,
    html: String,
}

fn enhance_file(path: &Path, config: &FolioConfig) -> Result<EnhancedPage> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let mut page = Page::open(&content, config)?;
    let ReadySummary {
        selects,
        covers,
        toggle,
    } = page.ready();

    Ok(EnhancedPage {
        selects,
        covers,
        toggle,
        html: page.into_document().render(),
    })
}

/// Write the enhanced markup, in place or under the output directory.
fn write_page(source: &Path, output: Option<&Path>, html: &str) -> Result<()> {
    let dest = match output {
        None => source.to_path_buf(),
        Some(dir) => {
            let rel: &Path = if source.is_absolute() {
                Path::new(source.file_name().unwrap_or(source.as_os_str()))
            } else {
                source
            };
            dir.join(rel)
        }
    };

    if let Some(parent) = dest.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, html).with_context(|| format!("writing {}", dest.display()))
}
