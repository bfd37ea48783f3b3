#![forbid(unsafe_code)]

pub mod bookmark;
pub mod error;
pub mod export;
pub mod html;
pub mod locate;
pub mod sidebar;

use log::info;

use crate::bookmark::{build_bookmark_tree, BookmarkTree};
use crate::html::{bookmarks_to_html, HtmlOptions};
use crate::sidebar::{classify_spaces, ItemIndex, SpaceRegistry, StorableSidebar};

pub use crate::error::{LocatorError, MalformedSpaceError, SidebarError};

/// Everything produced by a single conversion
#[derive(Clone, Debug)]
pub struct Conversion {
    pub registry: SpaceRegistry,
    pub tree: BookmarkTree,
    pub html: String,
}

/// Convert the pinned spaces of the sidebar into a Netscape bookmark file.
///
/// The document is processed in a single pass: locate the global container,
/// classify its spaces, rebuild the tree of each pinned space and render it.
/// Any structural problem aborts the conversion, items that are neither a tab
/// or a folder are left out silently.
pub fn convert_sidebar(
    sidebar: &StorableSidebar,
    options: HtmlOptions,
) -> Result<Conversion, SidebarError> {
    let container = sidebar.global_container()?;

    info!("Getting spaces...");
    let registry = classify_spaces(container.spaces)?;

    info!("Converting to bookmarks...");
    let items = ItemIndex::new(container.items);
    let tree = build_bookmark_tree(&registry.pinned, &items)?;

    info!("Converting bookmarks to HTML...");
    let html = bookmarks_to_html(&tree.roots, options);

    Ok(Conversion {
        registry,
        tree,
        html,
    })
}

/// Same as [`convert_sidebar`] with the default options, from the raw JSON
pub fn convert_json_to_html(json: &str) -> Result<String, SidebarError> {
    let sidebar = StorableSidebar::from_json(json)?;
    convert_sidebar(&sidebar, HtmlOptions::default()).map(|conv| conv.html)
}
