use std::collections::HashSet;

use log::{debug, trace};
use serde::Serialize;

use crate::error::SidebarError;
use crate::sidebar::{ItemIndex, ItemShape, SpaceMap};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookmarkNode {
    Folder {
        title: String,
        children: Vec<BookmarkNode>,
    },
    Bookmark {
        title: String,
        url: String,
    },
}

impl BookmarkNode {
    pub fn title(&self) -> &str {
        match self {
            BookmarkNode::Folder { title, .. }
            | BookmarkNode::Bookmark { title, .. } => title,
        }
    }
}

/// One folder per pinned space, with the items under its root container.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkTree {
    pub roots: Vec<BookmarkNode>,
    /// bookmarks found under the roots
    pub bookmarks: usize,
    /// folders found under the roots, not counting the roots themselves
    pub folders: usize,
}

/// Rebuild the bookmark tree of every pinned space.
///
/// Roots follow the order of `pinned`, and children the order of the
/// original item list.
pub fn build_bookmark_tree(
    pinned: &SpaceMap,
    items: &ItemIndex<'_>,
) -> Result<BookmarkTree, SidebarError> {
    let mut builder = TreeBuilder {
        items,
        path: HashSet::new(),
        bookmarks: 0,
        folders: 0,
    };
    let roots = pinned
        .iter()
        .map(|(container_id, space_title)| {
            Ok(BookmarkNode::Folder {
                title: space_title.to_owned(),
                children: builder.children(container_id)?,
            })
        })
        .collect::<Result<Vec<_>, SidebarError>>()?;

    debug!("Found {} bookmarks.", builder.bookmarks);
    debug!("Found {} folders.", builder.folders);
    Ok(BookmarkTree {
        roots,
        bookmarks: builder.bookmarks,
        folders: builder.folders,
    })
}

struct TreeBuilder<'i, 'a> {
    items: &'i ItemIndex<'a>,
    /// ids being expanded, from the root to the current folder
    path: HashSet<String>,
    bookmarks: usize,
    folders: usize,
}

impl TreeBuilder<'_, '_> {
    fn children(
        &mut self,
        parent_id: &str,
    ) -> Result<Vec<BookmarkNode>, SidebarError> {
        if !self.path.insert(parent_id.to_owned()) {
            return Err(SidebarError::ItemCycle {
                id: parent_id.to_owned(),
            });
        }

        let items = self.items;
        let mut children = Vec::new();
        for item in items.children_of(parent_id) {
            match item.shape {
                ItemShape::Bookmark { title, url } => {
                    self.bookmarks += 1;
                    children.push(BookmarkNode::Bookmark {
                        title: title.to_owned(),
                        url: url.to_owned(),
                    });
                }
                ItemShape::Folder { title } => {
                    self.folders += 1;
                    let entries = self.children(&item.id)?;
                    children.push(BookmarkNode::Folder {
                        title: title.to_owned(),
                        children: entries,
                    });
                }
                ItemShape::Unclassifiable => {
                    trace!("Item `{}` is neither a tab or a folder", item.id);
                }
            }
        }

        self.path.remove(parent_id);
        Ok(children)
    }
}
