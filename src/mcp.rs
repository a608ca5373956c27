use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::commands;
use crate::pdf::PdfDocument;

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfExtractRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Pages to keep, 1-based (e.g., '1,3-5,7'). Empty or omitted keeps all pages")]
    #[serde(default)]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfDeleteRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Pages to remove, 1-based (e.g., '2,4-6')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolvePagesRequest {
    #[schemars(description = "Page specification, 1-based (e.g., '1,3-5,7')")]
    pub pages: String,
    #[schemars(description = "Page count of the document")]
    pub total_pages: u32,
    #[schemars(description = "Treat the pages as ones to remove (default: false)")]
    #[serde(default)]
    pub exclude: bool,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: Serialize>(result: Result<T>) -> String {
    match result {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("Error: {}", e))
        }
        Err(e) => {
            warn!(error = %e, "tool call failed");
            format!("Error: {}", e)
        }
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Get PDF metadata including title, author, creator, producer, creation date, and page count")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        to_json(PdfDocument::open(&path).map(|doc| {
            let info = doc.get_info();
            PdfInfoResult {
                path,
                page_count: info.page_count,
                title: info.title,
                author: info.author,
                creator: info.creator,
                producer: info.producer,
                creation_date: info.creation_date,
                subject: info.subject,
                keywords: info.keywords,
            }
        }))
    }

    #[tool(description = "Copy selected pages of a PDF, in ascending order, into a new file. Page syntax: '1,3-5,7'. Invalid or out-of-range entries are ignored.")]
    fn pdf_extract(&self, Parameters(req): Parameters<PdfExtractRequest>) -> String {
        info!(path = %req.path, pages = %req.pages, "pdf_extract");
        to_json(
            commands::extract::run(&req.path, &req.pages, &req.output).map(|page_count| {
                PageCopyResult {
                    output_path: req.output,
                    page_count,
                }
            }),
        )
    }

    #[tool(description = "Remove selected pages from a PDF and save the remaining pages to a new file. Page syntax: '2,4-6'. Removing every page is rejected.")]
    fn pdf_delete(&self, Parameters(req): Parameters<PdfDeleteRequest>) -> String {
        info!(path = %req.path, pages = %req.pages, "pdf_delete");
        to_json(
            commands::delete::run(&req.path, &req.pages, &req.output).map(|page_count| {
                PageCopyResult {
                    output_path: req.output,
                    page_count,
                }
            }),
        )
    }

    #[tool(description = "Show which 1-based pages a page specification selects for a document of the given size, and which remain")]
    fn pdf_resolve_pages(&self, Parameters(req): Parameters<ResolvePagesRequest>) -> String {
        to_json(commands::resolve::compute(
            &req.pages,
            req.total_pages,
            req.exclude,
        ))
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub page_count: u32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PageCopyResult {
    pub output_path: String,
    pub page_count: u32,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page selection tools. Use pdf_info for metadata and page count, \
                 pdf_resolve_pages to preview a page specification, pdf_extract to keep \
                 selected pages, and pdf_delete to remove them."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();
    info!("serving MCP over stdio");

    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_tool_json() {
        let server = PdfServer::new();
        let out = server.pdf_resolve_pages(Parameters(ResolvePagesRequest {
            pages: "1,3".to_string(),
            total_pages: 4,
            exclude: true,
        }));
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["kept"], serde_json::json!([2, 4]));
    }

    #[test]
    fn test_resolve_tool_reports_errors() {
        let server = PdfServer::new();
        let out = server.pdf_resolve_pages(Parameters(ResolvePagesRequest {
            pages: "7".to_string(),
            total_pages: 5,
            exclude: false,
        }));
        assert_eq!(out, "Error: No valid pages specified: '7'");
    }

    #[test]
    fn test_delete_tool_reports_missing_file() {
        let server = PdfServer::new();
        let out = server.pdf_delete(Parameters(PdfDeleteRequest {
            path: "/nonexistent/in.pdf".to_string(),
            pages: "1".to_string(),
            output: "/nonexistent/out.pdf".to_string(),
        }));
        assert!(out.starts_with("Error: Failed to open PDF"));
    }

    #[test]
    fn test_extract_request_pages_default_empty() {
        let req: PdfExtractRequest =
            serde_json::from_str(r#"{"path": "a.pdf", "output": "b.pdf"}"#).unwrap();
        assert_eq!(req.pages, "");
    }
}
