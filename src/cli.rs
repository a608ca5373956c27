use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagecut")]
#[command(about = "Select, extract and delete PDF pages, with MCP server support")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server over stdio
    Mcp,

    /// Display PDF metadata
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Extract pages to a new PDF
    #[command(alias = "cat")]
    Extract {
        /// PDF file to extract from
        path: PathBuf,

        /// Pages to keep (e.g., "1,3-5,7"); all pages when omitted
        #[arg(default_value = "")]
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Delete pages, writing the remaining ones to a new PDF
    #[command(alias = "rm")]
    Delete {
        /// PDF file to delete from
        path: PathBuf,

        /// Pages to remove (e.g., "2,4-6")
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Split PDF into one file per page
    #[command(alias = "burst")]
    Split {
        /// PDF file to split
        path: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output_dir: PathBuf,

        /// Pages to split out; all pages when omitted
        #[arg(short, long, default_value = "")]
        pages: String,
    },

    /// Show which pages a page specification selects, without a document
    Resolve {
        /// Page specification (e.g., "1,3-5,7")
        pages: String,

        /// Page count of the document
        #[arg(short, long)]
        total: u32,

        /// Treat the pages as ones to remove and report what remains
        #[arg(short, long)]
        exclude: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_pages_optional() {
        let cli = Cli::try_parse_from(["pagecut", "extract", "in.pdf", "-o", "out.pdf"]).unwrap();
        match cli.command {
            Commands::Extract { pages, .. } => assert_eq!(pages, ""),
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_delete_requires_pages() {
        assert!(Cli::try_parse_from(["pagecut", "delete", "in.pdf", "-o", "out.pdf"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli =
            Cli::try_parse_from(["pagecut", "resolve", "1-2", "--total", "3", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
