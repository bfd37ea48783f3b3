use anyhow::{Context, Result};
use arc_bookmarks::export::{default_output_path, read_sidebar, write_bookmarks};
use arc_bookmarks::html::HtmlOptions;
use arc_bookmarks::locate::locate_sidebar_file;
use arc_bookmarks::sidebar::SIDEBAR_FILENAME;
use arc_bookmarks::{convert_sidebar, SidebarError};
use chrono::Local;
use log::{error, info};

use crate::Args;

pub fn convert(args: &Args) -> Result<()> {
    let input = match &args.input {
        Some(input) => input.clone(),
        None => locate_sidebar_file().inspect_err(|err| {
            if let SidebarError::InputNotFound { .. } = err {
                error!(
                    "File not found. Look for the \"{SIDEBAR_FILENAME}\" \
                    file within the \"~/Library/Application Support/Arc/\" folder."
                );
            }
        })?,
    };
    let options = HtmlOptions {
        escape: args.escape_html,
    };

    if args.dump_tree {
        let sidebar = read_sidebar(&input)?;
        let conversion = convert_sidebar(&sidebar, options)
            .with_context(|| format!("Unable to convert {}", input.display()))?;
        println!("{}", serde_json::to_string_pretty(&conversion.tree)?);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(Local::now().date_naive()));
    write_bookmarks(&input, &output, options)
        .with_context(|| format!("Unable to convert {}", input.display()))?;

    info!("Done!");
    Ok(())
}
