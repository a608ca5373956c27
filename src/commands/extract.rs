use crate::page_range::resolve_for_extraction;
use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Copy the pages named by `pages` into a new PDF. An empty `pages` copies every page.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &str, output: Q) -> Result<u32> {
    let doc = PdfDocument::open(&input)?;
    let total_pages = doc.page_count();

    let selected = resolve_for_extraction(pages, total_pages)?;
    info!(pages, selected = selected.len(), total_pages, "extracting pages");

    let mut new_doc = doc.copy_pages(&selected)?;
    PdfDocument::save(&mut new_doc, &output)?;

    Ok(selected.len() as u32)
}
