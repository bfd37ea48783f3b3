use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};

use crate::error::SidebarError;
use crate::html::HtmlOptions;
use crate::sidebar::StorableSidebar;
use crate::{convert_sidebar, Conversion};

/// `arc_bookmarks_<YYYY_MM_DD>.html`, used when no output path is given
pub fn default_output_path(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("arc_bookmarks_{}.html", date.format("%Y_%m_%d")))
}

pub fn read_sidebar(input: &Path) -> Result<StorableSidebar, SidebarError> {
    info!("Reading JSON...");
    let file = File::open(input).map_err(|err| SidebarError::io(input, err))?;
    StorableSidebar::from_reader(BufReader::new(file))
}

/// Convert the sidebar at `input` and write the bookmark file to `output`.
///
/// The output is only created after the whole conversion succeeded, a
/// malformed sidebar leaves `output` untouched.
pub fn write_bookmarks(
    input: &Path,
    output: &Path,
    options: HtmlOptions,
) -> Result<Conversion, SidebarError> {
    let sidebar = read_sidebar(input)?;
    let conversion = convert_sidebar(&sidebar, options)?;

    info!("Writing HTML...");
    std::fs::write(output, &conversion.html)
        .map_err(|err| SidebarError::io(output, err))?;
    debug!("HTML written to {}.", output.display());
    Ok(conversion)
}
