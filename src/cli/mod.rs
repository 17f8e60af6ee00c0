//! CLI argument parsing for bibkeep
//!
//! Global flags: --file, --format, --quiet, --verbose, --log-level,
//! --log-json. The bibliography file can come from `--file`, the
//! `BIBKEEP_FILE` environment variable, or a discovered `bibkeep.toml`.

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::FormatArgs;
pub use bibkeep_core::format::OutputFormat;
use parse::parse_format;

/// Bibkeep - annotated bibliography CLI
#[derive(Parser, Debug)]
#[command(name = "bibkeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Bibliography file operated on by annotate/list/summary
    #[arg(long, global = true, env = "BIBKEEP_FILE")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and progress detail
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render fetched-content JSON into bibliography entries
    Format(FormatArgs),

    /// Add or replace the key findings of one entry
    Annotate {
        /// URL substring identifying the entry (first match wins)
        url_pattern: String,

        /// Annotation text
        annotation: String,
    },

    /// List entries with their annotation status
    List {
        /// Show only entries that still need an annotation
        #[arg(long, short)]
        unannotated: bool,
    },

    /// Distill annotated entries into a summary document
    Summary {
        /// Output file (defaults to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        // Should not panic
        let result = Cli::try_parse_from(["bibkeep", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_cli_version() {
        // Should not panic
        let result = Cli::try_parse_from(["bibkeep", "--version"]);
        assert!(result.is_err()); // --version exits
    }

    #[test]
    fn test_parse_format_defaults() {
        let cli = Cli::try_parse_from(["bibkeep", "format"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        if let Commands::Format(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.output.is_none());
            assert!(!args.append);
        } else {
            panic!("Expected Format command");
        }
    }

    #[test]
    fn test_parse_format_with_options() {
        let cli = Cli::try_parse_from([
            "bibkeep",
            "format",
            "-i",
            "fetched.json",
            "-o",
            "bib.md",
            "--append",
            "--topic",
            "Memory Safety",
            "--annotation",
            "Worth rereading.",
        ])
        .unwrap();
        if let Commands::Format(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("fetched.json")));
            assert_eq!(args.output, Some(PathBuf::from("bib.md")));
            assert!(args.append);
            assert_eq!(args.topic.as_deref(), Some("Memory Safety"));
            assert_eq!(args.annotation.as_deref(), Some("Worth rereading."));
        } else {
            panic!("Expected Format command");
        }
    }

    #[test]
    fn test_append_requires_output() {
        let result = Cli::try_parse_from(["bibkeep", "format", "--append"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_annotate_positionals() {
        let cli = Cli::try_parse_from([
            "bibkeep",
            "annotate",
            "example.com/paper",
            "Key insight: X causes Y.",
            "--file",
            "bib.md",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("bib.md")));
        if let Commands::Annotate {
            url_pattern,
            annotation,
        } = cli.command
        {
            assert_eq!(url_pattern, "example.com/paper");
            assert_eq!(annotation, "Key insight: X causes Y.");
        } else {
            panic!("Expected Annotate command");
        }
    }

    #[test]
    fn test_parse_annotate_missing_args() {
        let result = Cli::try_parse_from(["bibkeep", "annotate", "example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_unannotated() {
        let cli = Cli::try_parse_from(["bibkeep", "list", "-u"]).unwrap();
        assert!(matches!(cli.command, Commands::List { unannotated: true }));
    }

    #[test]
    fn test_parse_summary_output() {
        let cli = Cli::try_parse_from(["bibkeep", "summary", "-o", "summary.md"]).unwrap();
        if let Commands::Summary { output } = cli.command {
            assert_eq!(output, Some(PathBuf::from("summary.md")));
        } else {
            panic!("Expected Summary command");
        }
    }

    #[test]
    fn test_parse_global_format_json() {
        let cli = Cli::try_parse_from(["bibkeep", "--format", "json", "list"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_unknown_format_rejected() {
        let result = Cli::try_parse_from(["bibkeep", "--format", "xml", "list"]);
        assert!(result.is_err());
    }
}
