use crate::page_range::{
    remaining_after, resolve, resolve_for_extraction, ResolvedPageSet, SelectionMode,
};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Resolution {
    pub total_pages: u32,
    /// Pages named by the specification, 1-based
    pub selected: Vec<u32>,
    /// Pages present in the output document, 1-based
    pub kept: Vec<u32>,
    /// Zero-based indices handed to the page copier
    pub indices: Vec<u32>,
}

impl Resolution {
    fn new(total_pages: u32, selected: &ResolvedPageSet, kept: &ResolvedPageSet) -> Self {
        Resolution {
            total_pages,
            selected: selected.page_numbers(),
            kept: kept.page_numbers(),
            indices: kept.to_vec(),
        }
    }
}

/// Resolve `pages` without a document. In exclude mode the kept pages are the complement.
pub fn compute(pages: &str, total_pages: u32, exclude: bool) -> Result<Resolution> {
    if total_pages == 0 {
        anyhow::bail!("Total pages must be at least 1");
    }

    let resolution = if exclude {
        let selected = resolve(pages, total_pages, SelectionMode::Exclude)?;
        let kept = remaining_after(&selected, total_pages)?;
        Resolution::new(total_pages, &selected, &kept)
    } else {
        let selected = resolve_for_extraction(pages, total_pages)?;
        Resolution::new(total_pages, &selected, &selected)
    };

    Ok(resolution)
}

pub fn run(pages: &str, total_pages: u32, exclude: bool) -> Result<()> {
    let resolution = compute(pages, total_pages, exclude)?;
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}
