use anyhow::{Context, Result};
use lopdf::{Document, Object};
use std::path::Path;
use tracing::{debug, info};

use crate::page_range::ResolvedPageSet;

pub struct PdfDocument {
    pub doc: Document,
    pub source: String,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = path.as_ref().display().to_string();
        let bytes =
            std::fs::read(&path).with_context(|| format!("Failed to open PDF: {}", source))?;
        let pdf = Self::load_mem(&bytes, &source)?;
        debug!(%source, pages = pdf.page_count(), "opened PDF");
        Ok(pdf)
    }

    /// Load a document from raw bytes, e.g. an uploaded file.
    pub fn load_mem(bytes: &[u8], source: &str) -> Result<Self> {
        let doc = Document::load_mem(bytes)
            .with_context(|| format!("Failed to parse PDF: {}", source))?;
        Ok(PdfDocument {
            doc,
            source: source.to_string(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get metadata from the document info dictionary
    pub fn get_info(&self) -> PdfInfo {
        let mut info = PdfInfo::default();

        if let Ok(Object::Reference(info_ref)) = self.doc.trailer.get(b"Info") {
            if let Ok(Object::Dictionary(dict)) = self.doc.get_object(*info_ref) {
                info.title = get_string_from_dict(dict, b"Title");
                info.author = get_string_from_dict(dict, b"Author");
                info.creator = get_string_from_dict(dict, b"Creator");
                info.producer = get_string_from_dict(dict, b"Producer");
                info.creation_date = get_string_from_dict(dict, b"CreationDate");
                info.mod_date = get_string_from_dict(dict, b"ModDate");
                info.subject = get_string_from_dict(dict, b"Subject");
                info.keywords = get_string_from_dict(dict, b"Keywords");
            }
        }

        info.page_count = self.page_count();
        info
    }

    /// Build a new document holding exactly the given zero-based pages, in
    /// ascending order.
    pub fn copy_pages(&self, pages: &ResolvedPageSet) -> Result<Document> {
        let total = self.page_count();

        if pages.is_empty() {
            anyhow::bail!("No pages to copy");
        }
        if let Some(bad) = pages.iter().find(|&i| i >= total) {
            anyhow::bail!("Page {} is out of range (1-{})", bad + 1, total);
        }

        // lopdf numbers pages from 1
        let pages_to_delete: Vec<u32> = (0..total)
            .filter(|i| !pages.contains(*i))
            .map(|i| i + 1)
            .collect();

        let mut new_doc = self.doc.clone();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
            let pruned = new_doc.prune_objects();
            debug!(
                source = %self.source,
                mode = ?pages.mode(),
                removed = pages_to_delete.len(),
                pruned = pruned.len(),
                "dropped pages"
            );
        }

        Ok(new_doc)
    }

    /// Save to a file
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        info!(path = %path.as_ref().display(), "saved PDF");
        Ok(())
    }

    /// Serialize to an in-memory buffer
    #[cfg(test)]
    pub fn to_bytes(doc: &mut Document) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).context("Failed to serialize PDF")?;
        Ok(buffer)
    }
}

#[derive(Debug, Default, Clone)]
pub struct PdfInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub page_count: u32,
}

fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => decode_pdf_string(bytes),
        _ => None,
    })
}

fn decode_pdf_string(bytes: &[u8]) -> Option<String> {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).ok()
    } else {
        // PDFDocEncoding, treated as Latin-1
        Some(bytes.iter().map(|&b| b as char).collect())
    }
}
