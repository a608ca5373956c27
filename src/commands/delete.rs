use crate::page_range::resolve_for_deletion;
use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Write a copy of `input` without the pages named by `pages`. Returns the number of pages kept.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, pages: &str, output: Q) -> Result<u32> {
    if pages.trim().is_empty() {
        anyhow::bail!("No pages specified for deletion");
    }

    let doc = PdfDocument::open(&input)?;
    let total_pages = doc.page_count();

    let kept = resolve_for_deletion(pages, total_pages)?;
    info!(
        pages,
        removed = total_pages as usize - kept.len(),
        total_pages,
        "deleting pages"
    );

    let mut new_doc = doc.copy_pages(&kept)?;
    PdfDocument::save(&mut new_doc, &output)?;

    Ok(kept.len() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_range::ResolveError;
    use crate::pdf::testing::{page_labels, sample_pdf};
    use lopdf::Document;

    #[test]
    fn test_delete_removes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        std::fs::write(&input, sample_pdf(5)).unwrap();
        let output = dir.path().join("out.pdf");

        assert_eq!(run(&input, "2-3, 5", &output).unwrap(), 2);

        let doc = Document::load(&output).unwrap();
        assert_eq!(page_labels(&doc), vec!["Page 1", "Page 4"]);
    }

    #[test]
    fn test_delete_all_pages_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        std::fs::write(&input, sample_pdf(3)).unwrap();
        let output = dir.path().join("out.pdf");

        let err = run(&input, "1-3", &output).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ResolveError>(),
            Some(&ResolveError::CannotRemoveAllPages { total_pages: 3 })
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_delete_requires_spec() {
        let err = run("missing.pdf", " ", "out.pdf").unwrap_err();
        assert_eq!(err.to_string(), "No pages specified for deletion");
    }
}
