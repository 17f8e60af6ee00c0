use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Input JSON file (defaults to stdin)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Output markdown file (defaults to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of replacing it
    #[arg(long, short = 'a', requires = "output")]
    pub append: bool,

    /// Topic section header for a fresh document
    #[arg(long, short = 't')]
    pub topic: Option<String>,

    /// Key-findings annotation applied to every entry in the batch
    #[arg(long)]
    pub annotation: Option<String>,

    /// Title override for every entry in the batch
    #[arg(long)]
    pub title: Option<String>,

    /// Author override, comma-separated
    #[arg(long)]
    pub authors: Option<String>,

    /// Publication date override
    #[arg(long)]
    pub date: Option<String>,
}
