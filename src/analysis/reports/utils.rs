//! Utility functions for report formatting

use crate::errors::AppResult;
use serde::Serialize;

/// Export data as pretty JSON (newline-terminated) for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(data)?;
    json.push('\n');
    Ok(json)
}
