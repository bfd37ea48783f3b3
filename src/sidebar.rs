mod item;
pub use item::*;

mod locator;
pub use locator::*;

mod space;
pub use space::*;

use std::borrow::Cow;
use std::io::Read;

use serde_json::Value;

use crate::error::SidebarError;

/// Name of the file Arc keeps its sidebar state in
pub const SIDEBAR_FILENAME: &str = "StorableSidebar.json";

/// The parsed content of a `StorableSidebar.json` file.
///
/// The schema is controlled by the browser and only partially known, so the
/// document is kept as a [`Value`] and each component checks only the fields
/// it needs.
#[derive(Clone, Debug)]
pub struct StorableSidebar {
    root: Value,
}

impl StorableSidebar {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn from_reader(input: impl Read) -> Result<Self, SidebarError> {
        Ok(Self::from_value(serde_json::from_reader(input)?))
    }

    pub fn from_json(input: &str) -> Result<Self, SidebarError> {
        Ok(Self::from_value(serde_json::from_str(input)?))
    }

    /// All the entries of `sidebar.containers`
    pub fn containers(&self) -> Result<&[Value], SidebarError> {
        self.root
            .get("sidebar")
            .and_then(|sidebar| sidebar.get("containers"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| SidebarError::shape("sidebar.containers", "an array"))
    }

    /// The container after the `global` marker, the one with the user spaces
    pub fn global_container(&self) -> Result<SidebarContainer<'_>, SidebarError> {
        let containers = self.containers()?;
        let index = locate_global_container(containers)?;
        SidebarContainer::from_value(&containers[index], index)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SidebarContainer<'a> {
    /// position inside `sidebar.containers`
    pub index: usize,
    pub spaces: &'a [Value],
    pub items: &'a [Value],
}

impl<'a> SidebarContainer<'a> {
    fn from_value(container: &'a Value, index: usize) -> Result<Self, SidebarError> {
        let field = |name: &str| {
            container
                .get(name)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .ok_or_else(|| {
                    SidebarError::shape(
                        format!("sidebar.containers[{index}].{name}"),
                        "an array",
                    )
                })
        };
        Ok(Self {
            index,
            spaces: field("spaces")?,
            items: field("items")?,
        })
    }
}

/// Text form of an ID value, used to match container IDs with `parentID`s.
///
/// Strings are used as is, anything else by its compact JSON form.
pub fn canonical_id(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(id) => Cow::Borrowed(id),
        other => Cow::Owned(other.to_string()),
    }
}
