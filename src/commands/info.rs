use crate::pdf::PdfDocument;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

pub fn run<P: AsRef<Path>>(path: P) -> Result<()> {
    let doc = PdfDocument::open(&path)?;
    let info = doc.get_info();
    debug!(?info, "read document info");

    println!("File: {}", path.as_ref().display());
    println!("Pages: {}", info.page_count);

    if let Some(title) = &info.title {
        println!("Title: {}", title);
    }
    if let Some(author) = &info.author {
        println!("Author: {}", author);
    }
    if let Some(subject) = &info.subject {
        println!("Subject: {}", subject);
    }
    if let Some(keywords) = &info.keywords {
        println!("Keywords: {}", keywords);
    }
    if let Some(creator) = &info.creator {
        println!("Creator: {}", creator);
    }
    if let Some(producer) = &info.producer {
        println!("Producer: {}", producer);
    }
    if let Some(creation_date) = &info.creation_date {
        println!("Created: {}", format_pdf_date(creation_date));
    }
    if let Some(mod_date) = &info.mod_date {
        println!("Modified: {}", format_pdf_date(mod_date));
    }

    Ok(())
}

/// Render a `D:YYYYMMDDHHmmSSOHH'mm` date as `YYYY-MM-DD HH:mm:SS`.
fn format_pdf_date(date: &str) -> String {
    if let Some(d) = date.strip_prefix("D:") {
        if all_digits(d, 8) {
            let year = &d[0..4];
            let month = &d[4..6];
            let day = &d[6..8];
            let time = if all_digits(d, 14) {
                format!(" {}:{}:{}", &d[8..10], &d[10..12], &d[12..14])
            } else {
                String::new()
            };
            return format!("{}-{}-{}{}", year, month, day, time);
        }
    }
    date.to_string()
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() >= len && s.as_bytes()[..len].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_date() {
        assert_eq!(format_pdf_date("D:20240131120501+01'00"), "2024-01-31 12:05:01");
    }

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_pdf_date("D:20240131"), "2024-01-31");
    }

    #[test]
    fn test_format_unrecognized_passthrough() {
        assert_eq!(format_pdf_date("yesterday"), "yesterday");
    }
}
