use std::path::{Path, PathBuf};

use log::debug;

use crate::error::SidebarError;
use crate::sidebar::SIDEBAR_FILENAME;

/// Directories that may contain the sidebar file, in search order.
///
/// The current directory always comes first, followed by the Arc data
/// directories of the running platform.
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".")];
    if cfg!(windows) {
        // %LOCALAPPDATA%\Packages\TheBrowserCompany.Arc_<publisher id>
        if let Some(local) = dirs::data_local_dir() {
            candidates.extend(
                arc_packages(&local.join("Packages"))
                    .into_iter()
                    .map(|package| {
                        package.join("LocalCache").join("Local").join("Arc")
                    }),
            );
        }
    } else if let Some(data) = dirs::data_dir() {
        // "~/Library/Application Support" on macos
        candidates.push(data.join("Arc"));
    }
    candidates
}

fn arc_packages(packages: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(packages) else {
        return vec![];
    };
    let mut found: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("TheBrowserCompany.Arc"))
        })
        .map(|entry| entry.path())
        .collect();
    found.sort();
    found
}

/// First `dir/StorableSidebar.json` that exists
pub fn find_sidebar_in(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|dir| dir.join(SIDEBAR_FILENAME))
        .find(|path| path.is_file())
}

pub fn locate_sidebar_file() -> Result<PathBuf, SidebarError> {
    let candidates = candidate_dirs();
    let path = find_sidebar_in(&candidates).ok_or_else(|| {
        SidebarError::InputNotFound {
            searched: candidates
                .iter()
                .map(|dir| dir.join(SIDEBAR_FILENAME))
                .collect(),
        }
    })?;
    debug!("Found {SIDEBAR_FILENAME} at {}.", path.display());
    Ok(path)
}
