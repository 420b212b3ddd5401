//! User-facing texts shared by the reducers.

pub const NAME_REQUIRED: &str = "Connection name is required";
pub const TYPE_REQUIRED: &str = "Please select a connection type.";
pub const UPDATE_KEYS_REQUIRED: &str = "Connection ID and type are required for update.";
pub const TYPE_IMMUTABLE: &str = "Connection type cannot be changed after creation.";

pub const LOAD_FALLBACK: &str = "An unknown error occurred while loading connections.";
pub const TEST_FALLBACK: &str = "An unknown error occurred during testing.";
pub const CREATE_FALLBACK: &str = "An unknown error occurred during creation.";
pub const UPDATE_FALLBACK: &str = "An unknown error occurred during update.";
pub const DELETE_FALLBACK: &str = "An unknown error occurred during deletion.";
pub const REINDEX_FALLBACK: &str = "An unknown error occurred during re-indexing.";

pub fn unknown_type(tag: &str) -> String {
    format!("Unknown connection type: {}", tag)
}

pub fn connection_not_found(id: &str) -> String {
    format!("Connection not found: {}", id)
}

pub fn created(name: &str) -> String {
    format!("{} has been successfully created.", name)
}

pub fn updated(name: &str) -> String {
    format!("{} has been successfully updated.", name)
}

pub fn deleted(name: &str) -> String {
    format!("{} has been successfully deleted.", name)
}

pub fn delete_failed(name: &str) -> String {
    format!("Could not delete {}. Please try again.", name)
}

pub fn reindex_started_title(name: &str) -> String {
    format!("Re-indexing {}...", name)
}

pub const REINDEX_STARTED_DESCRIPTION: &str = "Fetching latest data and updating index.";

pub fn reindex_initiated(name: &str) -> String {
    format!("{} is being re-indexed.", name)
}
