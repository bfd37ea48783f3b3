mod convert;
use convert::convert;
mod logger;
use logger::init_logger;
mod version;
use version::print_version;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Reads Arc Browser sidebar JSON data, converts it to a bookmarks HTML file
#[derive(Clone, Debug, Parser)]
struct Args {
    /// silence output
    #[arg(short, long)]
    silent: bool,
    /// output file path, defaults to `arc_bookmarks_<YYYY_MM_DD>.html`
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// sidebar file to read, if not specified search the Arc data directories
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// enable verbose output
    #[arg(short, long)]
    verbose: bool,
    /// escape html special characters in titles and urls
    #[arg(long)]
    escape_html: bool,
    /// print the bookmark tree as JSON instead of writing the HTML file
    #[arg(long)]
    dump_tree: bool,
    /// print the git short hash and commit time
    #[arg(long)]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args);

    if args.version {
        return print_version();
    }
    convert(&args)
}
