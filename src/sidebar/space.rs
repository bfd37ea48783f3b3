use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::error::{MalformedSpaceError, SidebarError};

use super::canonical_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PinState {
    Pinned,
    Unpinned,
}

impl PinState {
    /// Recognize a sentinel of `newContainerIDs`, eg: `{"pinned": {}}`.
    ///
    /// Plain container IDs and unrelated values return `None`.
    pub fn from_sentinel(value: &Value) -> Option<Self> {
        let marker = value.as_object()?;
        if marker.contains_key("pinned") {
            Some(Self::Pinned)
        } else if marker.contains_key("unpinned") {
            Some(Self::Unpinned)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PinState::Pinned => "pinned",
            PinState::Unpinned => "unpinned",
        }
    }
}

impl fmt::Display for PinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container ID to space title, in the order the containers were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpaceMap {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl SpaceMap {
    /// Register the space title for a container.
    ///
    /// A repeated container keeps its original position, but the new title
    /// replaces the old one, that is returned.
    pub fn insert(
        &mut self,
        container_id: String,
        title: String,
    ) -> Option<String> {
        match self.positions.entry(container_id) {
            Entry::Occupied(entry) => {
                let old = &mut self.entries[*entry.get()].1;
                Some(std::mem::replace(old, title))
            }
            Entry::Vacant(entry) => {
                let container_id = entry.key().clone();
                entry.insert(self.entries.len());
                self.entries.push((container_id, title));
                None
            }
        }
    }

    pub fn get(&self, container_id: &str) -> Option<&str> {
        self.positions
            .get(container_id)
            .map(|pos| self.entries[*pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(container_id, title)| (container_id.as_str(), title.as_str()))
    }
}

/// Spaces of the sidebar split by the pin state of their root containers.
///
/// Only `pinned` is exported as bookmarks, `unpinned` is kept for callers
/// that want to inspect it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpaceRegistry {
    pub pinned: SpaceMap,
    pub unpinned: SpaceMap,
    /// number of space records found
    pub spaces: usize,
}

impl SpaceRegistry {
    pub fn map(&self, state: PinState) -> &SpaceMap {
        match state {
            PinState::Pinned => &self.pinned,
            PinState::Unpinned => &self.unpinned,
        }
    }

    fn map_mut(&mut self, state: PinState) -> &mut SpaceMap {
        match state {
            PinState::Pinned => &mut self.pinned,
            PinState::Unpinned => &mut self.unpinned,
        }
    }
}

/// Build the [`SpaceRegistry`] from the `spaces` of the global container.
///
/// `spaces` interleaves bare space IDs with the space records, only the
/// records (objects) are considered. Untitled spaces are named `Space N`,
/// counting untitled spaces only.
pub fn classify_spaces(spaces: &[Value]) -> Result<SpaceRegistry, SidebarError> {
    let mut registry = SpaceRegistry::default();
    let mut untitled = 1usize;

    for (space_idx, space) in spaces.iter().enumerate() {
        let Some(space) = space.as_object() else {
            continue;
        };
        let title = match space.get("title").and_then(Value::as_str) {
            Some(title) => title.to_owned(),
            None => {
                let title = format!("Space {untitled}");
                untitled += 1;
                title
            }
        };

        let container_ids = space
            .get("newContainerIDs")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                SidebarError::shape(
                    format!("spaces[{space_idx}].newContainerIDs"),
                    "an array",
                )
            })?;
        // the ID after each sentinel is the root container of that state
        for (index, entry) in container_ids.iter().enumerate() {
            let Some(state) = PinState::from_sentinel(entry) else {
                continue;
            };
            let container_id =
                container_ids.get(index + 1).ok_or_else(|| MalformedSpaceError {
                    space: title.clone(),
                    state,
                    index,
                })?;
            registry
                .map_mut(state)
                .insert(canonical_id(container_id).into_owned(), title.clone());
        }
        registry.spaces += 1;
    }

    debug!("Found {} spaces.", registry.spaces);
    debug!(
        "{} pinned and {} unpinned containers.",
        registry.pinned.len(),
        registry.unpinned.len()
    );
    Ok(registry)
}
