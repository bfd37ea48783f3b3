use serde_json::Value;

use crate::error::LocatorError;

/// Find the index of the container holding the user spaces.
///
/// The `global` marker is an entry of its own, the spaces live in the
/// container right after it. Other entries (eg. the easel container) are
/// ignored.
pub fn locate_global_container(
    containers: &[Value],
) -> Result<usize, LocatorError> {
    let marker = containers
        .iter()
        .position(is_global_marker)
        .ok_or(LocatorError::MissingGlobalMarker)?;
    let target = marker + 1;
    if target >= containers.len() {
        return Err(LocatorError::MarkerAtEnd {
            marker,
            len: containers.len(),
        });
    }
    Ok(target)
}

fn is_global_marker(container: &Value) -> bool {
    container
        .as_object()
        .is_some_and(|container| container.contains_key("global"))
}
