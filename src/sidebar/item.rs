use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::trace;
use serde_json::{Map, Value};

use super::canonical_id;

/// What a sidebar item becomes in the bookmark tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemShape<'a> {
    /// item with a `data.tab` payload
    Bookmark { title: &'a str, url: &'a str },
    /// item with a `title` but no tab
    Folder { title: &'a str },
    /// neither, it's left out of the tree
    Unclassifiable,
}

impl<'a> ItemShape<'a> {
    pub fn classify(item: &'a Map<String, Value>) -> Self {
        if let Some(tab) = item.get("data").and_then(|data| data.get("tab")) {
            let saved = |key: &str| tab.get(key).and_then(Value::as_str);
            let title = item
                .get("title")
                .and_then(Value::as_str)
                .filter(|title| !title.is_empty())
                .or_else(|| saved("savedTitle"))
                .unwrap_or("");
            let url = saved("savedURL").unwrap_or("");
            return Self::Bookmark { title, url };
        }
        match item.get("title") {
            Some(title) => Self::Folder {
                title: title.as_str().unwrap_or(""),
            },
            None => Self::Unclassifiable,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RawItem<'a> {
    pub id: Cow<'a, str>,
    pub parent_id: Option<Cow<'a, str>>,
    pub shape: ItemShape<'a>,
}

impl<'a> RawItem<'a> {
    /// `None` if the item is not an object or have no `id`
    pub fn from_value(item: &'a Value) -> Option<Self> {
        let item = item.as_object()?;
        let id = canonical_id(item.get("id")?);
        let parent_id = item
            .get("parentID")
            .filter(|parent| !parent.is_null())
            .map(canonical_id);
        Some(Self {
            id,
            parent_id,
            shape: ItemShape::classify(item),
        })
    }
}

/// The flat `items` list indexed by ID and by parent.
///
/// Items are kept in list order. A duplicated ID keeps the position of the
/// first occurrence and the content of the last.
#[derive(Clone, Debug, Default)]
pub struct ItemIndex<'a> {
    items: Vec<RawItem<'a>>,
    positions: HashMap<String, usize>,
    children: HashMap<String, Vec<usize>>,
}

impl<'a> ItemIndex<'a> {
    pub fn new(items: &'a [Value]) -> Self {
        let mut index = Self::default();
        for value in items {
            let Some(item) = RawItem::from_value(value) else {
                trace!("Skipping item that can not be indexed: {value}");
                continue;
            };
            match index.positions.entry(item.id.to_string()) {
                Entry::Occupied(entry) => {
                    trace!("Duplicated item `{}`, keeping the last", item.id);
                    index.items[*entry.get()] = item;
                }
                Entry::Vacant(entry) => {
                    entry.insert(index.items.len());
                    index.items.push(item);
                }
            }
        }

        // only after deduplication, so a replaced item is listed under its
        // final parent only
        for (pos, item) in index.items.iter().enumerate() {
            if let Some(parent_id) = &item.parent_id {
                index
                    .children
                    .entry(parent_id.to_string())
                    .or_default()
                    .push(pos);
            }
        }
        index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RawItem<'a>> {
        self.positions.get(id).map(|pos| &self.items[*pos])
    }

    /// Items with `parentID == parent_id`, in list order
    pub fn children_of<'s>(
        &'s self,
        parent_id: &str,
    ) -> impl Iterator<Item = &'s RawItem<'a>> + 's {
        self.children
            .get(parent_id)
            .into_iter()
            .flatten()
            .map(|pos| &self.items[*pos])
    }
}
