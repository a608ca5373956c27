use crate::page_range::{resolve_for_extraction, ResolvedPageSet};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Write each selected page to its own file in `output_dir`. An empty `pages` selects every page.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output_dir: Q,
    pages: &str,
) -> Result<Vec<PathBuf>> {
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    let doc = PdfDocument::open(input)?;
    let selected = resolve_for_extraction(pages, doc.page_count())?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page");

    let mut written = Vec::with_capacity(selected.len());
    for index in selected.iter() {
        let output_path = output_dir.join(format!("{}_{:04}.pdf", stem, index + 1));
        debug!(page = index + 1, path = %output_path.display(), "writing page");

        let mut new_doc = doc.copy_pages(&ResolvedPageSet::single(index))?;
        PdfDocument::save(&mut new_doc, &output_path)?;
        written.push(output_path);
    }

    Ok(written)
}
