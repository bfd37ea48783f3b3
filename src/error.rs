use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::sidebar::PinState;

/// Failure to find the container that holds the user spaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocatorError {
    #[error("no entry of `sidebar.containers` has a `global` marker")]
    MissingGlobalMarker,
    #[error(
        "the `global` marker is the last entry of `sidebar.containers` \
        (index {marker} of {len}), no container follows it"
    )]
    MarkerAtEnd { marker: usize, len: usize },
}

/// A pin state sentinel with no container ID after it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "space `{space}` ends `newContainerIDs` with a `{state}` sentinel \
    (index {index}) and no container ID after it"
)]
pub struct MalformedSpaceError {
    pub space: String,
    pub state: PinState,
    pub index: usize,
}

#[derive(Debug, Error)]
pub enum SidebarError {
    #[error(
        "could not find `StorableSidebar.json`, looked in: {}",
        display_paths(.searched)
    )]
    InputNotFound { searched: Vec<PathBuf> },
    #[error("unable to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid sidebar JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected {expected} at `{path}`")]
    Shape { path: String, expected: &'static str },
    #[error(transparent)]
    Locator(#[from] LocatorError),
    #[error(transparent)]
    MalformedSpace(#[from] MalformedSpaceError),
    #[error("item `{id}` is its own ancestor, its `parentID` chain loops")]
    ItemCycle { id: String },
}

impl SidebarError {
    pub(crate) fn shape(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The input was read, but its content is not a usable sidebar
    pub fn is_malformed_document(&self) -> bool {
        !matches!(self, Self::InputNotFound { .. } | Self::Io { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("{path:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
